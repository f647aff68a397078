/// JSON document store for user state
///
/// One file holds the whole `UserState`. Saves replace it atomically.

use crate::error::{AssistantError, Result};
use crate::state::{UserState, CURRENT_VERSION};
use log::{debug, info, warn};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Suffix given to a document that failed to parse
const CORRUPT_SUFFIX: &str = "corrupt";

/// File-backed store for the user state document
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Create a store for the document at `path`
    ///
    /// Nothing is touched on disk until `load` or `save` is called.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the document file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the user state.
    ///
    /// Never fails: a missing document gives the default state, and so does
    /// an unreadable or corrupt one (after moving it aside).
    pub fn load(&self) -> UserState {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No user data at {}, starting fresh", self.path.display());
                return UserState::default();
            }
            Err(e) => {
                warn!("Could not read {}: {}", self.path.display(), e);
                return UserState::default();
            }
        };

        // Bytes that aren't valid UTF-8 JSON fail here too
        match serde_json::from_slice::<UserState>(&raw) {
            Ok(state) => {
                if state.version > CURRENT_VERSION {
                    warn!(
                        "User data version {} is newer than supported version {}; \
                         changes will not be saved over it",
                        state.version, CURRENT_VERSION
                    );
                }
                info!(
                    "Loaded user data: {} notes, {} reminders, {} todos",
                    state.notes.len(),
                    state.reminders.len(),
                    state.todo_list.len()
                );
                state
            }
            Err(e) => {
                warn!("User data at {} is corrupt: {}", self.path.display(), e);
                self.quarantine();
                UserState::default()
            }
        }
    }

    /// Write the user state, replacing the previous document
    ///
    /// The document is written to a temp file next to the target and renamed
    /// over it, so readers never see a half-written file. A state loaded from
    /// a newer document version is refused, since fields this build doesn't
    /// know were dropped on load.
    pub fn save(&self, state: &UserState) -> Result<()> {
        if state.version > CURRENT_VERSION {
            return Err(AssistantError::Persistence(format!(
                "{}: document version {} is newer than supported version {}",
                self.path.display(),
                state.version,
                CURRENT_VERSION
            )));
        }

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.persistence_error(e))?;

        let mut stamped = state.clone();
        stamped.version = CURRENT_VERSION;

        let tmp = NamedTempFile::new_in(&dir).map_err(|e| self.persistence_error(e))?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, &stamped)?;
            writer.flush().map_err(|e| self.persistence_error(e))?;
        }
        tmp.persist(&self.path)
            .map_err(|e| self.persistence_error(e.error))?;

        debug!("Saved user data to {}", self.path.display());
        Ok(())
    }

    /// Move a corrupt document out of the way so the next save can't bury it
    fn quarantine(&self) {
        let mut aside = self.path.clone().into_os_string();
        aside.push(".");
        aside.push(CORRUPT_SUFFIX);
        let aside = PathBuf::from(aside);

        match fs::rename(&self.path, &aside) {
            Ok(()) => warn!("Moved corrupt user data to {}", aside.display()),
            Err(e) => warn!("Could not move corrupt user data aside: {}", e),
        }
    }

    fn persistence_error(&self, e: std::io::Error) -> AssistantError {
        AssistantError::Persistence(format!("{}: {}", self.path.display(), e))
    }
}
