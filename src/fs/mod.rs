mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Kind of `path`, following symlinks. Fails with `NotFound` when absent.
    async fn stat(&self, path: &Path) -> io::Result<EntryKind>;

    /// Entries of `dir` in listing order; entry kinds do not follow symlinks.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;
}
