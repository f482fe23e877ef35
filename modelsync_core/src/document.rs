//! Handle on the TypeScript definitions document.
//!
//! The document is always read whole and written whole. Writes go to a
//! temporary file in the same directory which is then renamed over the target,
//! so a failed write leaves the previous content in place. The target keeps
//! its permissions; a new document is created as `0644` on unix.

use crate::error::Result;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionsDocument {
    path: PathBuf,
}

impl DefinitionsDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the whole document, `None` when it does not exist yet.
    pub fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                trace!(path = ?self.path, bytes = content.len(), "Read definitions document");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Append `text` at end-of-file, creating the document if needed.
    /// Existing bytes are kept exactly as they are.
    pub fn append(&self, text: &str) -> Result<()> {
        let mut content = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = ?self.path, "Creating definitions document");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        content.extend_from_slice(text.as_bytes());
        self.write_atomic(&content)
    }

    /// Replace the whole document.
    pub fn replace(&self, content: &str) -> Result<()> {
        self.write_atomic(content.as_bytes())
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(bytes)?;
        if let Some(permissions) = self.target_permissions()? {
            file.as_file().set_permissions(permissions)?;
        }
        file.as_file().sync_all()?;
        file.persist(&self.path)?;

        debug!(path = ?self.path, bytes = bytes.len(), "Wrote definitions document");
        Ok(())
    }

    /// Permissions the rewritten document should carry.
    fn target_permissions(&self) -> Result<Option<fs::Permissions>> {
        match fs::metadata(&self.path) {
            Ok(metadata) => Ok(Some(metadata.permissions())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(new_document_permissions()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn new_document_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_document_permissions() -> Option<fs::Permissions> {
    None
}
