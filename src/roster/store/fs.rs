use super::DataStore;
use crate::error::Result;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Permissions for the store file on creation: read/write for the owner,
/// read-only for group and other.
#[cfg(unix)]
const STORE_MODE: u32 = 0o644;

/// File-backed storage: the entire list lives in one JSON file.
///
/// Each read or write opens and closes the file within the call. No locking
/// is performed, so concurrent invocations against the same file can race.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_for_write(&self) -> io::Result<File> {
        let mut opts = OpenOptions::new();
        opts.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(STORE_MODE);
        }
        opts.open(&self.path)
    }
}

impl DataStore for FileStore {
    fn read_raw(&self) -> Result<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // First access creates the file empty, with the same
                // permissions a write would use.
                self.open_for_write()?;
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_raw(&mut self, data: &[u8]) -> Result<()> {
        let mut file = self.open_for_write()?;
        file.write_all(data)?;
        Ok(())
    }
}
