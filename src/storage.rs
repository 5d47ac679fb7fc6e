//! Pluggable storage backends for persisted UI preferences.
//!
//! Only [`UiPreferences`] survive a restart; household data arrives
//! through snapshots and is never written back.

#[cfg(feature = "storage-file")]
mod file;
mod memory;

#[cfg(feature = "storage-file")]
pub use file::FileStorage;
pub use memory::InMemoryStorage;

use crate::error::Result;
use crate::state::UiPreferences;

/// Storage backend for UI preferences.
pub trait Storage: core::fmt::Debug + Send + Sync {
    /// Returns the stored preferences.
    ///
    /// Returns [`UiPreferences::default`] if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    fn preferences(&self) -> Result<UiPreferences>;

    /// Replaces the stored preferences.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to write.
    fn set_preferences(&self, preferences: &UiPreferences) -> Result<()>;

    /// Removes everything stored, so the next read yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to clear.
    fn clear(&self) -> Result<()>;

    /// Reads, modifies and stores the preferences, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or the write fails.
    #[inline]
    fn update_preferences<F>(&self, update: F) -> Result<UiPreferences>
    where
        F: FnOnce(&mut UiPreferences),
        Self: Sized,
    {
        let mut preferences = self.preferences()?;
        update(&mut preferences);
        self.set_preferences(&preferences)?;
        Ok(preferences)
    }
}
