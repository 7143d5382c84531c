pub mod disk;
pub mod file;
pub mod format;

pub use disk::FileConfigStore;
pub use file::{ConfigFile, Section};
pub use format::ParseError;

use crate::error::AppResult;

/// Loads a configuration file from a (possibly `~/`-prefixed) path.
pub trait ConfigReader {
    fn read(&self, path: &str) -> AppResult<ConfigFile>;
}

/// Persists a configuration file to a (possibly `~/`-prefixed) path.
pub trait ConfigWriter {
    fn write(&self, file: &ConfigFile, path: &str) -> AppResult<()>;
}
