use bevy::platform::collections::HashMap;
use bevy::prelude::*;

/// Proof that `listener` is registered on `interactor`. Not clonable: it can be
/// redeemed once.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    interactor: Entity,
    listener: Entity,
}

impl Subscription {
    pub fn interactor(&self) -> Entity {
        self.interactor
    }

    pub fn listener(&self) -> Entity {
        self.listener
    }
}

/// Which listeners receive each interactor's hover and select notifications.
#[derive(Debug, Default, Resource)]
pub struct InteractorSubscriptions {
    listeners: HashMap<Entity, Vec<Entity>>,
}

impl InteractorSubscriptions {
    /// Registers `listener`, or returns `None` when it is already registered.
    pub fn subscribe(&mut self, interactor: Entity, listener: Entity) -> Option<Subscription> {
        let listeners = self.listeners.entry(interactor).or_default();
        if listeners.contains(&listener) {
            return None;
        }

        listeners.push(listener);
        Some(Subscription {
            interactor,
            listener,
        })
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let Some(listeners) = self.listeners.get_mut(&subscription.interactor) else {
            return false;
        };

        let before = listeners.len();
        listeners.retain(|&l| l != subscription.listener);
        let removed = listeners.len() != before;

        if listeners.is_empty() {
            self.listeners.remove(&subscription.interactor);
        }
        removed
    }

    /// Drops every registration held by a listener that no longer exists.
    pub fn remove_listener(&mut self, listener: Entity) {
        self.listeners.retain(|_, listeners| {
            listeners.retain(|&l| l != listener);
            !listeners.is_empty()
        });
    }

    pub fn listeners(&self, interactor: Entity) -> &[Entity] {
        self.listeners
            .get(&interactor)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_subscribed(&self, interactor: Entity, listener: Entity) -> bool {
        self.listeners(interactor).contains(&listener)
    }
}
