pub mod prompt;

pub use prompt::PromptSelector;

use std::io;

use thiserror::Error;

use crate::profile::ProfileCatalog;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("cancelled by user")]
    Cancelled,
    #[error("{0}")]
    Failed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Picks one profile out of the catalog.
///
/// On success the returned string is the bare `profile_name`, never the display label.
pub trait ProfileSelector {
    fn select_profile(
        &self,
        catalog: &ProfileCatalog,
        pattern: &str,
    ) -> Result<String, SelectionError>;
}

pub trait ValueSelector {
    fn select_value(&self, values: &[String], title: &str) -> Result<String, SelectionError>;
}

/// Drops a single trailing newline left by line-oriented selectors.
pub fn trim_selection(selected: &str) -> &str {
    selected.strip_suffix('\n').unwrap_or(selected)
}
