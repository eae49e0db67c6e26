//! In-memory file system for engine tests
//!
//! Records every mutation so tests can assert that nothing was touched.
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::FileMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFile {
    pub content: Vec<u8>,
    pub mode: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    CreateDir(PathBuf),
    Copy { from: PathBuf, to: PathBuf },
    SetMode { path: PathBuf, mode: u32 },
}

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, MockFile>,
    dirs: BTreeSet<PathBuf>,
    mutations: Vec<Mutation>,
    fail_copy_to: BTreeSet<PathBuf>,
    fail_mode_on: BTreeSet<PathBuf>,
    compare_calls: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<State>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.state.lock().unwrap().dirs.insert(PathBuf::from("/"));
        fs
    }

    /// Seed a file (and its parent directories) without recording a mutation.
    pub fn with_file(self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        let path = path.into();
        {
            let mut state = self.state.lock().unwrap();
            for ancestor in path.ancestors().skip(1) {
                if !ancestor.as_os_str().is_empty() {
                    state.dirs.insert(ancestor.to_path_buf());
                }
            }
            state.files.insert(
                path,
                MockFile {
                    content: content.to_vec(),
                    mode: 0o600,
                },
            );
        }
        self
    }

    /// Seed a directory without recording a mutation.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        {
            let mut state = self.state.lock().unwrap();
            for ancestor in path.ancestors() {
                if !ancestor.as_os_str().is_empty() {
                    state.dirs.insert(ancestor.to_path_buf());
                }
            }
        }
        self
    }

    pub fn fail_copy_to(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().fail_copy_to.insert(path.into());
        self
    }

    pub fn fail_mode_on(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().fail_mode_on.insert(path.into());
        self
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<MockFile> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().dirs.contains(path.as_ref())
    }

    pub fn mutations(&self) -> Vec<Mutation> {
        self.state.lock().unwrap().mutations.clone()
    }

    pub fn compare_calls(&self) -> usize {
        self.state.lock().unwrap().compare_calls
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: not found", path.display()),
    )
}

impl FileSystem for MockFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.state.lock().unwrap().files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        let chain: Vec<PathBuf> = path
            .ancestors()
            .filter(|a| !a.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect();

        if chain.iter().any(|p| state.files.contains_key(p)) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{}: file exists", path.display()),
            ));
        }

        for dir in chain.into_iter().rev() {
            if state.dirs.insert(dir.clone()) {
                state.mutations.push(Mutation::CreateDir(dir));
            }
        }
        Ok(())
    }

    fn contents_equal(&self, a: &Path, b: &Path) -> io::Result<bool> {
        let mut state = self.state.lock().unwrap();
        state.compare_calls += 1;
        let fa = state.files.get(a).ok_or_else(|| not_found(a))?;
        let fb = state.files.get(b).ok_or_else(|| not_found(b))?;
        Ok(fa.content == fb.content)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_copy_to.contains(to) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        let source = state.files.get(from).cloned().ok_or_else(|| not_found(from))?;
        let parent = to.parent().unwrap_or_else(|| Path::new("/"));
        if !parent.as_os_str().is_empty() && !state.dirs.contains(parent) {
            return Err(not_found(parent));
        }
        if state.dirs.contains(to) {
            return Err(io::Error::other(format!(
                "{}: is a directory",
                to.display()
            )));
        }
        state.files.insert(to.to_path_buf(), source);
        state.mutations.push(Mutation::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
        Ok(())
    }

    fn set_mode(&self, path: &Path, mode: FileMode) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_mode_on.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "operation not permitted",
            ));
        }
        let file = state.files.get_mut(path).ok_or_else(|| not_found(path))?;
        file.mode = mode.bits();
        state.mutations.push(Mutation::SetMode {
            path: path.to_path_buf(),
            mode: mode.bits(),
        });
        Ok(())
    }
}
