use bevy::prelude::*;

use crate::outline::Highlight;

/// Anything an interactor can hover and select. Carries its own highlight from creation.
#[derive(Debug, Clone, Copy, Default, Component, Reflect)]
#[reflect(Component)]
#[require(Highlight)]
pub struct Interactable;

/// Interactable the bubble cursor measures against.
#[derive(Debug, Clone, Copy, Default, Component, Reflect)]
#[reflect(Component)]
#[require(Interactable)]
pub struct Grabbable;

/// Direct interactor: hovers whatever its bubble trigger touches and selects on key press.
#[derive(Debug, Clone, Default, Component, Reflect)]
#[reflect(Component)]
pub struct Interactor {
    pub hovered: Vec<Entity>,
    pub selected: Option<Entity>,
}
