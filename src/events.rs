//! Gameplay event channel
//!
//! Pool-driven entities are decoupled from game-state scoring through an
//! explicit bus owned by the composing application: entities publish, the
//! score/stat keepers subscribe. Nothing here is process-global.

use crate::entities::Vec2;

/// Events published by pooled entities and the surrounding game flow.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// An enemy was destroyed at `position` (drives scoring and effects).
    EnemyDestroyed { position: Vec2 },

    /// The player collected a score-multiplier pickup.
    ScoreMultiplierCollected { value: i32 },

    /// The player ship was destroyed.
    PlayerShipDestroyed,

    /// A gameplay session ended.
    GameEnded { final_score: i32, ship_index: i32 },
}

/// Subscription handle returned by [`EventBus::subscribe`].
pub type SubscriptionId = usize;

/// A single-threaded observer list.
///
/// Subscribers run synchronously, in subscription order, on the thread that
/// publishes.
///
/// # Examples
///
/// ```
/// use arcade_objectpool::{EventBus, GameEvent};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut bus = EventBus::new();
/// let collected = Rc::new(Cell::new(0));
///
/// let sink = Rc::clone(&collected);
/// bus.subscribe(move |event| {
///     if let GameEvent::ScoreMultiplierCollected { value } = event {
///         sink.set(sink.get() + value);
///     }
/// });
///
/// bus.publish(&GameEvent::ScoreMultiplierCollected { value: 3 });
/// assert_eq!(collected.get(), 3);
/// ```
pub struct EventBus<E = GameEvent> {
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&E)>)>,
    next_id: SubscriptionId,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a subscriber; the returned id can be used to unsubscribe.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Deliver `event` to every subscriber, in subscription order.
    pub fn publish(&mut self, event: &E) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_delivery_in_subscription_order() {
        let mut bus: EventBus<GameEvent> = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for label in ["first", "second"] {
            let sink = Rc::clone(&seen);
            bus.subscribe(move |_| sink.borrow_mut().push(label));
        }

        bus.publish(&GameEvent::PlayerShipDestroyed);
        assert_eq!(*seen.borrow(), ["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut bus: EventBus<GameEvent> = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&hits);
        let id = bus.subscribe(move |_| *sink.borrow_mut() += 1);

        bus.publish(&GameEvent::PlayerShipDestroyed);
        bus.unsubscribe(id);
        bus.publish(&GameEvent::PlayerShipDestroyed);

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe_unknown_id_is_ignored() {
        let mut bus: EventBus<GameEvent> = EventBus::new();
        bus.unsubscribe(99);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_event_payload_reaches_subscribers() {
        let mut bus = EventBus::new();
        let total = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&total);
        bus.subscribe(move |event: &GameEvent| {
            if let GameEvent::GameEnded { final_score, .. } = event {
                *sink.borrow_mut() = *final_score;
            }
        });

        bus.publish(&GameEvent::GameEnded {
            final_score: 12_500,
            ship_index: 2,
        });
        assert_eq!(*total.borrow(), 12_500);
    }
}
