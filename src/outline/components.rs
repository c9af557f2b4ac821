use bevy::prelude::*;

use crate::interaction::InteractionMessage;

use super::subscription::Subscription;

/// Mutually exclusive outline styles, in line color order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum HighlightStyle {
    #[default]
    None,
    Hover,
    Selected,
}

impl HighlightStyle {
    pub const fn color_index(self) -> usize {
        self as usize
    }
}

impl From<&InteractionMessage> for HighlightStyle {
    fn from(message: &InteractionMessage) -> Self {
        match message {
            InteractionMessage::HoverEnter { .. } => HighlightStyle::Hover,
            InteractionMessage::SelectEnter { .. } => HighlightStyle::Selected,
            InteractionMessage::HoverExit { .. } | InteractionMessage::SelectExit { .. } => {
                HighlightStyle::None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component, Reflect)]
#[reflect(Component)]
pub struct Highlight(pub HighlightStyle);

/// Line colors an outline renderer draws with, indexed by [`HighlightStyle::color_index`].
#[derive(Debug, Clone, Component, Reflect)]
#[reflect(Component)]
pub struct OutlineEffect {
    pub line_colors: [Color; 3],
}

impl OutlineEffect {
    pub fn color(&self, style: HighlightStyle) -> Color {
        self.line_colors[style.color_index()]
    }
}

/// Outlines whatever `interactor` hovers or selects, as long as `effect` is set.
///
/// Left empty, both are looked up when the provider is added.
#[derive(Debug, Component)]
pub struct OutlineProvider {
    pub interactor: Option<Entity>,
    pub effect: Option<Entity>,
    pub enabled: bool,
    pub(super) subscription: Option<Subscription>,
}

impl Default for OutlineProvider {
    fn default() -> Self {
        Self {
            interactor: None,
            effect: None,
            enabled: true,
            subscription: None,
        }
    }
}

impl OutlineProvider {
    pub fn new(interactor: Entity, effect: Entity) -> Self {
        Self {
            interactor: Some(interactor),
            effect: Some(effect),
            ..Default::default()
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}
