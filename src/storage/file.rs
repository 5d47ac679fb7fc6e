//! JSON-file-based storage backend.
//!
//! Stores the UI preferences as `preferences.json` under a configurable
//! directory (default: `$XDG_DATA_HOME/myduit/`).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::{MyDuitError, Result};
use crate::state::UiPreferences;

/// Application name used for the XDG data directory.
const APP_NAME: &str = "myduit";

/// File name for the persisted preferences.
const PREFERENCES_FILE: &str = "preferences.json";
/// Sentinel file used for cross-process file locking.
const LOCK_FILE: &str = "storage.lock";

/// File-backed preference storage.
///
/// # Concurrency
///
/// Thread safety within a single process is provided by an in-process
/// [`Mutex`]. Cross-process safety is achieved via an advisory file lock
/// on `storage.lock` (using [`std::fs::File::lock`] /
/// [`std::fs::File::lock_shared`]).
///
/// Reads acquire a shared lock, writes an exclusive one.
///
/// # File layout
///
/// ```text
/// <dir>/
///   storage.lock          (cross-process lock sentinel)
///   preferences.json
/// ```
#[derive(Debug)]
pub struct FileStorage {
    /// Root directory containing the JSON file.
    dir: PathBuf,
    /// Mutex serializing concurrent in-process access.
    lock: Mutex<()>,
    /// Sentinel file for cross-process advisory locking.
    lock_file: fs::File,
}

impl FileStorage {
    /// Creates a new file storage rooted at the given directory.
    ///
    /// Creates the directory (and parents) if it does not exist, and opens
    /// (or creates) the `storage.lock` sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the lock
    /// file cannot be opened.
    #[inline]
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).map_err(storage_io_error)?;
        let lock_file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(dir.join(LOCK_FILE))
            .map_err(storage_io_error)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
            lock_file,
        })
    }

    /// Returns the default XDG-compliant data directory for this application.
    ///
    /// On Linux: `$XDG_DATA_HOME/myduit/` (typically
    /// `~/.local/share/myduit/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined.
    #[inline]
    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|data_path| data_path.join(APP_NAME))
            .ok_or_else(|| {
                MyDuitError::Storage("could not determine platform data directory".into())
            })
    }

    /// Directory the preferences are stored in.
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // ── Private helpers ─────────────────────────────────────────────

    /// Returns the full path for a given file name.
    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Acquires an in-process mutex guard and a shared (read) file lock,
    /// executes `op`, then releases the file lock.
    fn with_shared_lock<R, F: FnOnce() -> Result<R>>(&self, op: F) -> Result<R> {
        let _guard: MutexGuard<'_, ()> = self.lock.lock().map_err(|err| lock_poison_error(&err))?;
        self.lock_file.lock_shared().map_err(storage_io_error)?;
        let result = op();
        // The operation's own error wins over an unlock failure.
        if let Err(err) = self.lock_file.unlock()
            && result.is_ok()
        {
            return Err(storage_io_error(err));
        }
        result
    }

    /// Acquires an in-process mutex guard and an exclusive (write) file
    /// lock, executes `op`, then releases the file lock.
    fn with_exclusive_lock<R, F: FnOnce() -> Result<R>>(&self, op: F) -> Result<R> {
        let _guard: MutexGuard<'_, ()> = self.lock.lock().map_err(|err| lock_poison_error(&err))?;
        self.lock_file.lock().map_err(storage_io_error)?;
        let result = op();
        if let Err(err) = self.lock_file.unlock()
            && result.is_ok()
        {
            return Err(storage_io_error(err));
        }
        result
    }

    /// Reads the preferences file. Returns the defaults if it does not
    /// exist.
    fn read_preferences(&self) -> Result<UiPreferences> {
        match fs::read_to_string(self.path(PREFERENCES_FILE)) {
            Ok(contents) => serde_json::from_str(&contents).map_err(MyDuitError::from),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(UiPreferences::default()),
            Err(err) => Err(storage_io_error(err)),
        }
    }

    /// Atomically writes the preferences file (write-to-tmp then rename).
    fn write_preferences(&self, preferences: &UiPreferences) -> Result<()> {
        let path = self.path(PREFERENCES_FILE);
        let tmp_path = self.path(&format!("{PREFERENCES_FILE}.tmp"));
        let json = serde_json::to_string_pretty(preferences).map_err(MyDuitError::from)?;
        fs::write(&tmp_path, json).map_err(storage_io_error)?;
        fs::rename(&tmp_path, &path).map_err(storage_io_error)?;
        tracing::debug!(
            path = %path.display(),
            show_balance = preferences.show_balance,
            is_demo_mode = preferences.is_demo_mode,
            "wrote preferences"
        );
        Ok(())
    }

    /// Deletes the preferences file.
    ///
    /// The `storage.lock` sentinel is kept; it is infrastructure, not data.
    fn clear_all(&self) -> Result<()> {
        self.with_exclusive_lock(|| match fs::remove_file(self.path(PREFERENCES_FILE)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_io_error(err)),
        })
    }
}

// ── Free-standing helpers ───────────────────────────────────────────────

/// Wraps an I/O error into a [`MyDuitError::Storage`].
fn storage_io_error(err: std::io::Error) -> MyDuitError {
    MyDuitError::Storage(Box::new(err))
}

/// Wraps a mutex poison error into a [`MyDuitError::Storage`].
fn lock_poison_error<T>(err: &std::sync::PoisonError<T>) -> MyDuitError {
    MyDuitError::Storage(err.to_string().into())
}

impl super::Storage for FileStorage {
    #[inline]
    fn preferences(&self) -> Result<UiPreferences> {
        self.with_shared_lock(|| self.read_preferences())
    }

    #[inline]
    fn set_preferences(&self, preferences: &UiPreferences) -> Result<()> {
        self.with_exclusive_lock(|| self.write_preferences(preferences))
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.clear_all()
    }

    #[inline]
    fn update_preferences<F>(&self, update: F) -> Result<UiPreferences>
    where
        F: FnOnce(&mut UiPreferences),
    {
        self.with_exclusive_lock(|| {
            let mut preferences = self.read_preferences()?;
            update(&mut preferences);
            self.write_preferences(&preferences)?;
            Ok(preferences)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    /// Helper to create a [`FileStorage`] in a temporary directory.
    fn temp_storage() -> (FileStorage, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        (storage, dir)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let (storage, _dir) = temp_storage();
        assert_eq!(storage.preferences().unwrap(), UiPreferences::default());
    }

    #[test]
    fn set_and_get_preferences() {
        let (storage, _dir) = temp_storage();
        let prefs = UiPreferences {
            show_balance: false,
            is_demo_mode: true,
        };
        storage.set_preferences(&prefs).unwrap();
        assert_eq!(storage.preferences().unwrap(), prefs);
        assert!(!storage.path(&format!("{PREFERENCES_FILE}.tmp")).exists());
    }

    #[test]
    fn preferences_survive_reopen() {
        let (storage, dir) = temp_storage();
        let _prefs = storage
            .update_preferences(|prefs| prefs.is_demo_mode = false)
            .unwrap();
        drop(storage);

        let reopened = FileStorage::new(dir.path().to_path_buf()).unwrap();
        assert!(!reopened.preferences().unwrap().is_demo_mode);
    }

    #[test]
    fn writes_camel_case_json() {
        let (storage, _dir) = temp_storage();
        storage.set_preferences(&UiPreferences::default()).unwrap();
        let raw = fs::read_to_string(storage.path(PREFERENCES_FILE)).unwrap();
        assert!(raw.contains("\"showBalance\": true"));
        assert!(raw.contains("\"isDemoMode\": true"));
    }

    #[test]
    fn corrupt_file_is_serialization_error() {
        let (storage, _dir) = temp_storage();
        fs::write(storage.path(PREFERENCES_FILE), "not json").unwrap();
        assert!(matches!(
            storage.preferences(),
            Err(MyDuitError::Serialization(_))
        ));
    }

    #[test]
    fn clear_removes_preferences() {
        let (storage, _dir) = temp_storage();
        let _prefs = storage
            .update_preferences(|prefs| prefs.show_balance = false)
            .unwrap();
        storage.clear().unwrap();
        assert!(!storage.path(PREFERENCES_FILE).exists());
        assert!(storage.preferences().unwrap().show_balance);
        // Clearing twice is fine.
        storage.clear().unwrap();
    }

    #[test]
    fn default_dir_returns_path() {
        // May fail in exotic CI environments, but should work on standard systems.
        if let Ok(dir) = FileStorage::default_dir() {
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn lockfile_created_on_construction() {
        let (storage, _dir) = temp_storage();
        assert!(storage.path(LOCK_FILE).exists());
    }

    #[test]
    fn clear_preserves_lockfile() {
        let (storage, _dir) = temp_storage();
        storage.clear_all().unwrap();
        assert!(storage.path(LOCK_FILE).exists());
    }

    #[test]
    fn concurrent_updates_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let (storage, _dir) = temp_storage();
        let storage = Arc::new(storage);
        let num_threads: usize = 8;
        let flips_per_thread: usize = 25;

        let handles: Vec<_> = (0..num_threads)
            .map(|_| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    for _ in 0..flips_per_thread {
                        let _prefs = storage
                            .update_preferences(|prefs| prefs.show_balance = !prefs.show_balance)
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // 200 flips: back to the default.
        assert!(storage.preferences().unwrap().show_balance);
    }
}
