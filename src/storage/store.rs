//! The key-value storage port.

use crate::error::StoreError;

/// Session-scoped string key-value storage.
///
/// The engine only talks to storage through this trait, so tests can use
/// [`MemoryStore`](super::MemoryStore) and hosts can plug in whatever
/// durable medium they have.
///
/// ## Implementation Notes
///
/// - `get` on a missing key returns `Ok(None)`, not an error
/// - `set` and `remove` are write-through: durable when they return
/// - `set_many` is all-or-nothing: on error no key has changed
/// - `clear` removes every key the store holds
pub trait KeyValueStore {
    /// Read a value.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Delete everything.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Write several values at once. On error every key keeps its old value.
    ///
    /// The default writes one key at a time and restores the keys already
    /// written if a later write fails. Stores that can write a batch in one
    /// step should override it.
    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        let mut previous = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let old = match self.get(key) {
                Ok(old) => old,
                Err(e) => {
                    restore(self, &previous);
                    return Err(e);
                }
            };
            if let Err(e) = self.set(key, value) {
                restore(self, &previous);
                return Err(e);
            }
            previous.push((*key, old));
        }
        Ok(())
    }
}

/// Undo writes made by the default `set_many`, newest first.
fn restore<S: KeyValueStore + ?Sized>(store: &mut S, previous: &[(&str, Option<String>)]) {
    for (key, old) in previous.iter().rev() {
        let undone = match old {
            Some(value) => store.set(key, value),
            None => store.remove(key),
        };
        if let Err(e) = undone {
            log::error!("failed to roll back {:?}: {}", key, e);
        }
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        (**self).clear()
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        (**self).set_many(entries)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        (**self).clear()
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        (**self).set_many(entries)
    }
}
