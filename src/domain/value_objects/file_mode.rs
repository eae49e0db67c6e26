//! File mode and item role value objects

/// Unix permission bits applied to a freshly copied target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// rwxr-xr-x, for the service binary
    pub const EXECUTABLE: FileMode = FileMode(0o755);
    /// rw-r--r--, for config, database and unit files
    pub const DATA: FileMode = FileMode(0o644);

    pub const fn new(bits: u32) -> Self {
        Self(bits & 0o7777)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

/// What a deployment item is, which fixes its declared order and default mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemRole {
    Binary,
    Config,
    Database,
    ServiceUnit,
}

impl ItemRole {
    pub fn default_mode(&self) -> FileMode {
        match self {
            ItemRole::Binary => FileMode::EXECUTABLE,
            ItemRole::Config | ItemRole::Database | ItemRole::ServiceUnit => FileMode::DATA,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemRole::Binary => "binary",
            ItemRole::Config => "config",
            ItemRole::Database => "database",
            ItemRole::ServiceUnit => "service",
        }
    }
}
