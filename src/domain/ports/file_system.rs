//! FileSystem port - abstraction over the file operations the engine needs
//!
//! Implementations:
//! - `LocalFs` - real disk, atomic copies through a temp file
//! - `MockFileSystem` - in-memory, records every mutation (tests only)

use std::io;
use std::path::Path;

use crate::domain::value_objects::FileMode;

/// Abstract file system interface
///
/// Errors are plain `io::Error`s; the calling service decides which
/// `DeployError` they become.
pub trait FileSystem {
    /// Path exists and is a regular file (symlinks are followed)
    fn is_file(&self, path: &Path) -> bool;

    /// Path exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Byte-for-byte comparison of two files
    fn contents_equal(&self, a: &Path, b: &Path) -> io::Result<bool>;

    /// Copy `from` over `to`, carrying permission bits and timestamps
    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Set permission bits
    fn set_mode(&self, path: &Path, mode: FileMode) -> io::Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn contents_equal(&self, a: &Path, b: &Path) -> io::Result<bool> {
        (**self).contents_equal(a, b)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).copy_file(from, to)
    }

    fn set_mode(&self, path: &Path, mode: FileMode) -> io::Result<()> {
        (**self).set_mode(path, mode)
    }
}
