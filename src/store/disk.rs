use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::expand_home;
use crate::error::{AppError, AppResult};

use super::{ConfigFile, ConfigReader, ConfigWriter};

/// Reads and writes configuration files on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigStore;

impl FileConfigStore {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigReader for FileConfigStore {
    fn read(&self, path: &str) -> AppResult<ConfigFile> {
        let path = expand_home(path)?;
        debug!(path = %path.display(), "reading config file");

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::FileNotFound(path));
            }
            Err(err) => return Err(err.into()),
        };

        raw.parse::<ConfigFile>()
            .map_err(|source| AppError::Parse { path, source })
    }
}

impl ConfigWriter for FileConfigStore {
    fn write(&self, file: &ConfigFile, path: &str) -> AppResult<()> {
        let path = expand_home(path)?;
        let payload = file.to_string();

        match replace_file(&path, payload.as_bytes()) {
            Ok(()) => {
                debug!(path = %path.display(), bytes = payload.len(), "wrote config file");
                Ok(())
            }
            Err(source) => Err(AppError::Write { path, source }),
        }
    }
}

/// Writes `payload` to a temp file next to `path` and persists it over `path`, so a
/// failed write leaves the previous contents untouched.
fn replace_file(path: &Path, payload: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(payload)?;
    temp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        temp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
