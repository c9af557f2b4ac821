use bevy::prelude::*;

/// Hover and select notifications raised by an interactor about one interactable.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMessage {
    HoverEnter { interactor: Entity, interactable: Entity },
    HoverExit { interactor: Entity, interactable: Entity },
    SelectEnter { interactor: Entity, interactable: Entity },
    SelectExit { interactor: Entity, interactable: Entity },
}

impl InteractionMessage {
    pub fn interactor(&self) -> Entity {
        match *self {
            Self::HoverEnter { interactor, .. }
            | Self::HoverExit { interactor, .. }
            | Self::SelectEnter { interactor, .. }
            | Self::SelectExit { interactor, .. } => interactor,
        }
    }

    pub fn interactable(&self) -> Entity {
        match *self {
            Self::HoverEnter { interactable, .. }
            | Self::HoverExit { interactable, .. }
            | Self::SelectEnter { interactable, .. }
            | Self::SelectExit { interactable, .. } => interactable,
        }
    }
}
