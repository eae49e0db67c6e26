//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::{self, File, FileTimes};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::FileMode;

const COMPARE_BUF_SIZE: usize = 64 * 1024;
const TEMP_PREFIX: &str = ".rwdeploy-";

/// Local file system implementation
///
/// Copies are atomic: content goes to a temp file next to the target,
/// which is then renamed over it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn contents_equal(&self, a: &Path, b: &Path) -> io::Result<bool> {
        contents_equal(a, b)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        let dir = to
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut source = File::open(from)?;
        let meta = source.metadata()?;

        let mut tmp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(dir)?;
        io::copy(&mut source, tmp.as_file_mut())?;

        tmp.as_file().set_permissions(meta.permissions())?;
        let mut times = FileTimes::new();
        if let Ok(accessed) = meta.accessed() {
            times = times.set_accessed(accessed);
        }
        if let Ok(modified) = meta.modified() {
            times = times.set_modified(modified);
        }
        tmp.as_file().set_times(times)?;
        tmp.as_file().sync_all()?;

        tmp.persist(to)?;
        Ok(())
    }

    fn set_mode(&self, path: &Path, mode: FileMode) -> io::Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(mode.bits()))
        }
        #[cfg(not(unix))]
        {
            let _ = mode;
            fs::metadata(path).map(|_| ())
        }
    }
}

/// Stream both files and compare every byte.
///
/// Differing lengths short-circuit to `false`; equal lengths are never
/// taken as proof of equality.
pub fn contents_equal(a: &Path, b: &Path) -> io::Result<bool> {
    let file_a = File::open(a)?;
    let file_b = File::open(b)?;

    if file_a.metadata()?.len() != file_b.metadata()?.len() {
        return Ok(false);
    }

    let mut reader_a = BufReader::with_capacity(COMPARE_BUF_SIZE, file_a);
    let mut reader_b = BufReader::with_capacity(COMPARE_BUF_SIZE, file_b);

    loop {
        let buf_a = reader_a.fill_buf()?;
        let buf_b = reader_b.fill_buf()?;

        if buf_a.is_empty() && buf_b.is_empty() {
            return Ok(true);
        }

        let n = buf_a.len().min(buf_b.len());
        // One side hit EOF first: the file changed size under us.
        if n == 0 || buf_a[..n] != buf_b[..n] {
            return Ok(false);
        }

        reader_a.consume(n);
        reader_b.consume(n);
    }
}
