use anyhow::{Context, bail};
use bevy::app::AppExit;

use bubble_reach::{ReachConfig, generate_app, parse_config};

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => parse_config(&path).with_context(|| format!("loading {path}"))?,
        None => ReachConfig::default(),
    };

    match generate_app(config).run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with code {code}"),
    }
}
