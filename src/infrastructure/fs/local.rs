//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the destination directory followed by a
/// rename, so a reader never sees a half-written post.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> FsError + '_ {
    move |e| FsError::from_io(e, path)
}

fn ensure_parent(path: &Path) -> FsResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    Ok(())
}

impl FileSystem for LocalFs {
    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(io_err(path))? {
            let entry = entry.map_err(io_err(path))?;
            let is_dir = entry.file_type().map_err(io_err(path))?.is_dir();
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(io_err(path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        ensure_parent(path)?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err(dir))?;
        tmp.write_all(content.as_bytes()).map_err(io_err(path))?;
        tmp.persist(path).map_err(|e| FsError::from_io(e.error, path))?;
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        ensure_parent(to)?;
        std::fs::copy(from, to).map_err(io_err(from))?;
        Ok(())
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> FsResult<()> {
        for entry in WalkDir::new(from) {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| from.to_path_buf());
                match e.into_io_error() {
                    Some(io) => FsError::from_io(io, &path),
                    None => FsError::Other(format!("cannot walk {}", path.display())),
                }
            })?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| FsError::Other(e.to_string()))?;
            let dest: PathBuf = to.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest).map_err(io_err(&dest))?;
            } else {
                self.copy_file(entry.path(), &dest)?;
            }
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(io_err(path))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir_all(path).map_err(io_err(path))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(io_err(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
