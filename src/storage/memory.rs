//! In-memory storage backend for testing.
//!
//! Provides [`InMemoryStorage`], a thread-safe in-memory implementation of
//! [`super::Storage`]. Useful for tests and for runs that should not touch
//! the user's data directory.

use std::sync::Mutex;

use crate::error::{MyDuitError, Result};
use crate::state::UiPreferences;

/// Thread-safe in-memory preference storage.
///
/// # Example
///
/// ```rust
/// use myduit::storage::{InMemoryStorage, Storage};
///
/// let storage = InMemoryStorage::new();
/// let prefs = storage.update_preferences(|p| p.show_balance = false).unwrap();
/// assert!(!prefs.show_balance);
/// assert!(!storage.preferences().unwrap().show_balance);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    /// All state behind a single mutex for thread-safe interior mutability.
    inner: Mutex<Option<UiPreferences>>,
}

impl InMemoryStorage {
    /// Creates a new empty in-memory storage.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the inner lock and applies a closure.
    fn with_lock<R>(&self, op: impl FnOnce(&mut Option<UiPreferences>) -> R) -> Result<R> {
        let mut inner = self.inner.lock().map_err(|err| lock_error(&err))?;
        Ok(op(&mut inner))
    }
}

/// Wraps a mutex poison error.
fn lock_error<T>(err: &std::sync::PoisonError<T>) -> MyDuitError {
    MyDuitError::Storage(err.to_string().into())
}

impl super::Storage for InMemoryStorage {
    #[inline]
    fn preferences(&self) -> Result<UiPreferences> {
        self.with_lock(|stored| stored.unwrap_or_default())
    }

    #[inline]
    fn set_preferences(&self, preferences: &UiPreferences) -> Result<()> {
        self.with_lock(|stored| *stored = Some(*preferences))
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.with_lock(|stored| *stored = None)
    }

    #[inline]
    fn update_preferences<F>(&self, update: F) -> Result<UiPreferences>
    where
        F: FnOnce(&mut UiPreferences),
    {
        self.with_lock(|stored| {
            let mut preferences = stored.unwrap_or_default();
            update(&mut preferences);
            *stored = Some(preferences);
            preferences
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    #[test]
    fn empty_storage_returns_defaults() {
        let storage = InMemoryStorage::new();
        assert_eq!(storage.preferences().unwrap(), UiPreferences::default());
    }

    #[test]
    fn set_and_get_preferences() {
        let storage = InMemoryStorage::new();
        let prefs = UiPreferences {
            show_balance: false,
            is_demo_mode: false,
        };
        storage.set_preferences(&prefs).unwrap();
        assert_eq!(storage.preferences().unwrap(), prefs);
    }

    #[test]
    fn clear_restores_defaults() {
        let storage = InMemoryStorage::new();
        let _prefs = storage
            .update_preferences(|prefs| prefs.is_demo_mode = false)
            .unwrap();
        storage.clear().unwrap();
        assert!(storage.preferences().unwrap().is_demo_mode);
    }

    #[test]
    fn concurrent_toggles_are_serialized() {
        use std::sync::Arc;
        use std::thread;

        let storage = Arc::new(InMemoryStorage::new());
        let handles: Vec<_> = (0..10_u8)
            .map(|_| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    let _prefs = storage
                        .update_preferences(|prefs| prefs.show_balance = !prefs.show_balance)
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        // An even number of flips lands back on the default.
        assert!(storage.preferences().unwrap().show_balance);
    }
}
