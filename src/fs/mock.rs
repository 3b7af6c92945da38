use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(io::ErrorKind, String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    kinds: HashMap<PathBuf, EntryKind>,
    listings: HashMap<PathBuf, Response>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    /// Register `dir` as a directory with the given listing. Listed
    /// entries become stat-able with their own kinds.
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let dir = dir.into();
        let mut inner = self.inner.lock().expect("mock fs lock");
        for entry in &entries {
            inner.kinds.entry(entry.path.clone()).or_insert(entry.kind);
        }
        inner.kinds.insert(dir.clone(), EntryKind::Directory);
        inner.listings.insert(dir, Response::Ok(entries));
    }

    pub fn set_file(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.kinds.insert(path.into(), EntryKind::File);
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, kind: io::ErrorKind, message: impl Into<String>) {
        let dir = dir.into();
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.kinds.insert(dir.clone(), EntryKind::Directory);
        inner
            .listings
            .insert(dir, Response::Err(kind, message.into()));
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.kinds.get(path).copied().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not mocked", path.display()))
        })
    }

    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.listings.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock response for {}", dir.display()),
            )),
        }
    }
}
