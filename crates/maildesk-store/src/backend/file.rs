//! File-backed storage: one file per key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::StorageBackend;
use crate::Result;

/// Stores each key as one file in a root directory, the way a browser keeps
/// one entry per key in its local storage.
///
/// Keys are mapped to file names through an injective percent-style
/// encoding, so arbitrary key strings (including `::` separators) are safe.
/// Writes go through a sibling temp file and a rename, which makes each save
/// a single atomic replacement from the reader's point of view.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Create a backend in the platform data directory
    /// (`<data_dir>/<app_dir>`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoDataDir`] if the platform exposes no data
    /// directory, or an I/O error if it cannot be created.
    pub fn in_data_dir(app_dir: &str) -> Result<Self> {
        let base = dirs::data_dir().ok_or(crate::Error::NoDataDir)?;
        Self::new(base.join(app_dir))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(encode_file_name(key))
    }

    /// The directory this backend stores its entries in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let name = encode_file_name(key);
        let path = self.root.join(&name);
        let tmp = self.root.join(format!("{name}.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Encode a key into a file name, percent-escaping anything outside
/// `[A-Za-z0-9._-]`. The encoding is injective, so distinct keys always map
/// to distinct files.
fn encode_file_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' | b'_' | b'-' => {
                out.push(char::from(byte));
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn read_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        assert!(backend.read("never-written").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        backend.write("maildesk::app::u_x::drafts", "[1,2,3]").unwrap();
        assert_eq!(
            backend.read("maildesk::app::u_x::drafts").unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }

    #[test]
    fn write_replaces_prior_value() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        backend.write("k", "first").unwrap();
        backend.write("k", "second").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        backend.write("k", "v").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert!(backend.read("k").unwrap().is_none());
    }

    #[test]
    fn keys_with_separators_do_not_collide_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        backend.write("a::b::c", "one").unwrap();
        backend.write("a::b_c", "two").unwrap();
        assert_eq!(backend.read("a::b::c").unwrap().as_deref(), Some("one"));
        assert_eq!(backend.read("a::b_c").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let backend = FileBackend::new(dir.path()).unwrap();
            backend.write("k", "persisted").unwrap();
        }
        let reopened = FileBackend::new(dir.path()).unwrap();
        assert_eq!(reopened.read("k").unwrap().as_deref(), Some("persisted"));
    }
}
