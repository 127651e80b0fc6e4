// File: crates/protherm-chart/src/library.rs
// Summary: Schedule library directory; maps caller-supplied program identifiers to files inside it.
// Notes:
// - Identifiers are reduced to their final path component before joining, so a request
//   can never name a file outside the library directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LibraryError;

/// Where program files live unless configured otherwise.
pub const DEFAULT_LIB_DIR: &str = "/usr/local/lib/protherm";

/// Program listing filter: `PROG*.txt`.
const PROGRAM_PREFIX: &str = "PROG";
const PROGRAM_SUFFIX: &str = ".txt";

/// Bare file name for `identifier`: everything after the last `/` or `\`.
/// Empty names and `.`/`..` are rejected.
pub fn sanitize_identifier(identifier: &str) -> Option<String> {
    let name = identifier
        .trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("")
        .trim_matches('\0');
    match name {
        "" | "." | ".." => None,
        n if n.contains('\0') => None,
        n => Some(n.to_string()),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramLibrary {
    dir: PathBuf,
}

impl Default for ProgramLibrary {
    fn default() -> Self { Self::new(DEFAULT_LIB_DIR) }
}

impl ProgramLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    /// Sanitized program name and the file it refers to.
    pub fn resolve(&self, identifier: &str) -> Result<(String, PathBuf), LibraryError> {
        let name = sanitize_identifier(identifier)
            .ok_or_else(|| LibraryError::InvalidIdentifier(identifier.to_string()))?;
        let path = self.dir.join(&name);
        debug!(identifier, name = %name, path = %path.display(), "resolved program");
        Ok((name, path))
    }

    /// Program files (`PROG*.txt`, regular files only), sorted by name.
    /// A missing library directory lists as empty.
    pub fn list(&self) -> Result<Vec<String>, LibraryError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(e) => e,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(LibraryError::Io { path: self.dir.clone(), source }),
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| LibraryError::Io { path: self.dir.clone(), source })?;
            let Ok(name) = entry.file_name().into_string() else { continue };
            if !(name.starts_with(PROGRAM_PREFIX) && name.ends_with(PROGRAM_SUFFIX)) {
                continue;
            }
            if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}
