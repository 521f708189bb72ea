//! Persisted photo types

use std::path::PathBuf;

/// A photo that made it to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    /// 1-based, unique for the lifetime of the persister
    pub sequence_number: u32,
    pub file_path: PathBuf,
}
