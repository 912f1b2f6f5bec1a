//! Status-listener registries.
//!
//! The panel announces status changes over two independent channels: one
//! carrying the new [`AlarmStatus`], one the new [`ArmingStatus`].  Each
//! channel is a plain list of boxed callbacks — notification is synchronous
//! and runs in registration order, and the engine only fires a channel for
//! writes that actually changed the stored value.
//!
//! [`AlarmStatus`]: crate::alarm::AlarmStatus
//! [`ArmingStatus`]: crate::alarm::ArmingStatus

/// Opaque handle identifying a registered listener within one registry.
///
/// Handles are registry-local: removing a handle from a registry it was not
/// issued by is a no-op, as is removing the same handle twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Insertion-ordered registry of callbacks for one notification channel.
pub struct ListenerRegistry<T> {
    entries: Vec<(ListenerId, Box<dyn FnMut(T)>)>,
    next_id: u64,
}

impl<T: Copy> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback; returns the handle needed to remove it later.
    pub fn add(&mut self, listener: impl FnMut(T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered callback.  Unknown handles are a no-op.
    pub fn remove(&mut self, id: ListenerId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Invoke every callback with `value`, in registration order.
    pub fn notify_all(&mut self, value: T) {
        for (_, listener) in &mut self.entries {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Copy> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
