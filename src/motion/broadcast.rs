use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::progress::Progress;

type Listener<T> = Rc<dyn Fn(T)>;

struct Listeners<T> {
    next_id: usize,
    entries: Vec<(usize, Listener<T>)>,
}

/// Single-event publish/subscribe channel.
///
/// Delivery is synchronous and fire-and-forget; a listener sees every value
/// published while it is subscribed and nothing else. Dropping the returned
/// [`Subscription`] unsubscribes.
pub struct Channel<T> {
    listeners: Rc<RefCell<Listeners<T>>>,
}

/// Hero scroll progress, rebroadcast to the chapter beneath the hero.
pub type SunriseChannel = Channel<Progress>;

impl<T: Copy + 'static> Channel<T> {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    pub fn publish(&self, value: T) {
        // Listeners may subscribe or unsubscribe while being notified.
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            (*listener)(value);
        }
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription<T>
    where
        F: Fn(T) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

impl<T: Copy + 'static> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: self.listeners.clone(),
        }
    }
}

impl<T> PartialEq for Channel<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.listeners, &other.listeners)
    }
}

pub struct Subscription<T> {
    id: usize,
    listeners: Weak<RefCell<Listeners<T>>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribers_receive_published_values() {
        let channel = SunriseChannel::new();
        let seen = Rc::new(Cell::new(Progress::START));
        let _sub = {
            let seen = seen.clone();
            channel.subscribe(move |p| seen.set(p))
        };
        channel.publish(Progress::new(0.4));
        channel.publish(Progress::new(0.7));
        assert_eq!(seen.get(), Progress::new(0.7));
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let channel: Channel<u32> = Channel::new();
        let hits = Rc::new(Cell::new(0));
        let sub = {
            let hits = hits.clone();
            channel.subscribe(move |_| hits.set(hits.get() + 1))
        };
        channel.publish(1);
        drop(sub);
        channel.publish(2);
        assert_eq!(hits.get(), 1);
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_channel_is_harmless() {
        let channel: Channel<u32> = Channel::new();
        let sub = channel.subscribe(|_| {});
        drop(channel);
        drop(sub);
    }

    #[test]
    fn clones_share_listeners() {
        let channel: Channel<u32> = Channel::new();
        let other = channel.clone();
        assert!(channel == other);
        assert!(channel != Channel::new());

        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = hits.clone();
            other.subscribe(move |v| hits.set(v))
        };
        channel.publish(9);
        assert_eq!(hits.get(), 9);
    }
}
