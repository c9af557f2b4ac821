use bevy::prelude::*;
use derivative::Derivative;

/// Grows and shrinks a sphere trigger so it just reaches the nearest grabbable.
///
/// `trigger` points at the entity carrying [`BubbleTrigger`] (its position is the tracked
/// point) and `visual` at the entity carrying [`BubbleVisual`]. Either one missing turns the
/// cursor off for that tick.
#[derive(Debug, Clone, Component, Reflect, Derivative)]
#[derivative(Default)]
#[reflect(Component)]
pub struct BubbleCursor {
    #[derivative(Default(value = "0.1"))]
    pub min_radius: f32,
    #[derivative(Default(value = "0.5"))]
    pub max_radius: f32,
    pub trigger: Option<Entity>,
    pub visual: Option<Entity>,
}

impl BubbleCursor {
    pub fn new(min_radius: f32, max_radius: f32) -> Self {
        Self {
            min_radius,
            max_radius,
            ..Default::default()
        }
    }

    pub fn with_trigger(mut self, trigger: Entity) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn with_visual(mut self, visual: Entity) -> Self {
        self.visual = Some(visual);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, Component, Reflect)]
#[reflect(Component)]
pub struct BubbleTrigger;

#[derive(Debug, Clone, Copy, Default, Component, Reflect)]
#[reflect(Component)]
pub struct BubbleVisual;

/// Radius currently applied to a trigger's sphere collider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Component, Reflect)]
#[reflect(Component)]
pub struct BubbleRadius(pub f32);
