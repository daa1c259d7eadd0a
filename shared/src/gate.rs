use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use log::{info, warn};

/// State key recording that the admin view was unlocked.
pub const UNLOCKED_KEY: &str = "rsvp_admin_unlocked";
/// State key holding the passcode that unlocked the admin view.
pub const PASSCODE_KEY: &str = "rsvp_admin_pass";

/// Durable key/value state that outlives the process.
pub trait StateStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// State store persisted as a small JSON object on disk.
///
/// Reads happen once at startup; writes go straight back to the file. An
/// unreadable or corrupt file is treated as empty rather than an error.
pub struct FileStateStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStateStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!("Ignoring corrupt state file {}: {}", path.display(), err);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        FileStateStore {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        match serde_json::to_string_pretty(entries) {
            Ok(raw) => {
                if let Err(err) = fs::write(&self.path, raw) {
                    warn!("Failed to persist state to {}: {}", self.path.display(), err);
                }
            }
            Err(err) => warn!("Failed to serialize state: {}", err),
        }
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }
}

/// Passcode gate in front of the admin view.
///
/// A successful unlock is written to the state store, so later sessions (and
/// restarts) come up unlocked without re-entering the passcode. The stored
/// passcode is trusted as-is; the remote store re-validates it on every
/// admin call, so a stale one simply stops returning data.
pub struct AdminGate {
    secret: String,
    storage: Box<dyn StateStore>,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>, storage: Box<dyn StateStore>) -> Self {
        AdminGate {
            secret: secret.into(),
            storage,
        }
    }

    /// Compares the candidate against the configured secret, ignoring
    /// surrounding whitespace. Records the unlock on success.
    pub fn unlock(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if candidate != self.secret {
            return false;
        }

        self.storage.set(UNLOCKED_KEY, "true");
        self.storage.set(PASSCODE_KEY, candidate);
        info!("Admin view unlocked");
        true
    }

    /// True when a previous unlock is on record with a non-empty passcode.
    pub fn is_unlocked(&self) -> bool {
        self.storage.get(UNLOCKED_KEY).as_deref() == Some("true")
            && self
                .storage
                .get(PASSCODE_KEY)
                .is_some_and(|pass| !pass.is_empty())
    }

    /// Returns the recorded passcode while the gate is unlocked.
    pub fn stored_passcode(&self) -> Option<String> {
        if !self.is_unlocked() {
            return None;
        }
        self.storage.get(PASSCODE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_state_store::MemoryStateStore;

    fn gate_with_memory(secret: &str) -> AdminGate {
        AdminGate::new(secret, Box::new(MemoryStateStore::new()))
    }

    #[test]
    fn unlock_accepts_exact_passcode() {
        let gate = gate_with_memory("1234");

        assert!(gate.unlock("1234"));
        assert!(gate.is_unlocked());
        assert_eq!(gate.stored_passcode().as_deref(), Some("1234"));
    }

    #[test]
    fn unlock_trims_surrounding_whitespace() {
        let gate = gate_with_memory("1234");

        assert!(gate.unlock("  1234  "));
        // The trimmed passcode is what gets stored
        assert_eq!(gate.stored_passcode().as_deref(), Some("1234"));
    }

    #[test]
    fn unlock_rejects_wrong_and_empty_passcodes() {
        let gate = gate_with_memory("1234");

        assert!(!gate.unlock("4321"));
        assert!(!gate.unlock(""));
        assert!(!gate.unlock("   "));
        assert!(!gate.is_unlocked());
        assert!(gate.stored_passcode().is_none());
    }

    #[test]
    fn unlock_persists_both_state_keys() {
        let storage = MemoryStateStore::new();
        let gate = AdminGate::new("1234", Box::new(storage.clone()));

        gate.unlock("1234");

        assert_eq!(storage.get(UNLOCKED_KEY).as_deref(), Some("true"));
        assert_eq!(storage.get(PASSCODE_KEY).as_deref(), Some("1234"));
    }

    #[test]
    fn preexisting_state_unlocks_without_a_passcode_prompt() {
        let storage = MemoryStateStore::new();
        storage.set(UNLOCKED_KEY, "true");
        storage.set(PASSCODE_KEY, "1234");

        let gate = AdminGate::new("1234", Box::new(storage));

        assert!(gate.is_unlocked());
        assert_eq!(gate.stored_passcode().as_deref(), Some("1234"));
    }

    #[test]
    fn stale_stored_passcode_is_still_trusted() {
        // The configured secret changed after the unlock was recorded. The
        // gate stays open; the remote store is what rejects the stale code.
        let storage = MemoryStateStore::new();
        storage.set(UNLOCKED_KEY, "true");
        storage.set(PASSCODE_KEY, "old-pass");

        let gate = AdminGate::new("new-pass", Box::new(storage));

        assert!(gate.is_unlocked());
        assert_eq!(gate.stored_passcode().as_deref(), Some("old-pass"));
    }

    #[test]
    fn unlocked_flag_without_passcode_stays_locked() {
        let storage = MemoryStateStore::new();
        storage.set(UNLOCKED_KEY, "true");

        let gate = AdminGate::new("1234", Box::new(storage));

        assert!(!gate.is_unlocked());
        assert!(gate.stored_passcode().is_none());
    }

    #[test]
    fn file_state_store_survives_reopen() {
        let path = std::env::temp_dir().join(format!(
            "rsvp_gate_state_{}_reopen.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        {
            let store = FileStateStore::open(&path);
            store.set(UNLOCKED_KEY, "true");
            store.set(PASSCODE_KEY, "1234");
        }

        let reopened = FileStateStore::open(&path);
        assert_eq!(reopened.get(UNLOCKED_KEY).as_deref(), Some("true"));
        assert_eq!(reopened.get(PASSCODE_KEY).as_deref(), Some("1234"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn file_state_store_treats_corrupt_file_as_empty() {
        let path = std::env::temp_dir().join(format!(
            "rsvp_gate_state_{}_corrupt.json",
            std::process::id()
        ));
        fs::write(&path, "{ this is not json").unwrap();

        let store = FileStateStore::open(&path);
        assert!(store.get(UNLOCKED_KEY).is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn gate_over_file_store_unlocks_across_restarts() {
        let path = std::env::temp_dir().join(format!(
            "rsvp_gate_state_{}_restart.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        {
            let gate = AdminGate::new("1234", Box::new(FileStateStore::open(&path)));
            assert!(!gate.is_unlocked());
            assert!(gate.unlock("1234"));
        }

        // Fresh gate, same file: the earlier unlock is still honored.
        let gate = AdminGate::new("1234", Box::new(FileStateStore::open(&path)));
        assert!(gate.is_unlocked());

        let _ = fs::remove_file(&path);
    }
}
