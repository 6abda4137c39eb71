use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Error raised when committing an output file to disk.
#[derive(Debug, Error)]
#[error("failed to write '{path}'")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A fully rendered output file, committed atomically.
///
/// Content is staged in a temporary file in the destination directory and
/// renamed over the target only once completely written. A run that fails
/// before `commit` returns leaves the destination untouched, including any
/// output from a previous run.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    /// Create an output file with the given destination path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the rendered content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the content to the destination, replacing any existing file.
    pub fn commit(&self) -> Result<(), WriteError> {
        // Stage in the destination directory so the final rename never
        // crosses a filesystem boundary.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| self.error(e))?;

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| self.error(e))?;
        staged
            .write_all(self.content.as_bytes())
            .map_err(|e| self.error(e))?;
        staged.as_file().sync_all().map_err(|e| self.error(e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.error(e.error))?;
        Ok(())
    }

    fn error(&self, source: std::io::Error) -> WriteError {
        WriteError {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_commit_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.py");

        OutputFile::new(&path, "content").commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_commit_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("out.py");

        OutputFile::new(&path, "nested").commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_commit_replaces_previous_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.py");

        fs::write(&path, "previous run").unwrap();
        OutputFile::new(&path, "current run").commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "current run");
    }

    #[test]
    fn test_commit_leaves_no_temp_files_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.py");

        OutputFile::new(&path, "content").commit().unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_commit_keeps_destination() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out.py");
        fs::write(&dest, "previous run").unwrap();

        // A destination whose parent is a regular file cannot be staged into.
        let bogus = dest.join("nested.py");
        let err = OutputFile::new(&bogus, "new").commit().unwrap_err();

        assert_eq!(err.path, bogus);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "previous run");
    }
}
