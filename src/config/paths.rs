use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const DEFAULT_CREDENTIALS_PATH: &str = "~/.aws/credentials";
pub const DEFAULT_CONFIG_PATH: &str = "~/.aws/config";
pub const DEFAULT_SETTINGS_PATH: &str = "~/.aws-profile/config.yaml";

/// Paths as the user supplied them; `~/` is expanded only when a file is opened.
#[derive(Debug, Clone)]
pub struct AppPaths {
    credentials_path: String,
    config_path: String,
    settings_path: String,
}

impl AppPaths {
    pub fn new(
        credentials_path: impl Into<String>,
        config_path: impl Into<String>,
        settings_path: impl Into<String>,
    ) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            config_path: config_path.into(),
            settings_path: settings_path.into(),
        }
    }

    pub fn credentials_path(&self) -> &str {
        &self.credentials_path
    }

    pub fn config_path(&self) -> &str {
        &self.config_path
    }

    pub fn settings_path(&self) -> &str {
        &self.settings_path
    }
}

pub fn expand_home(path: &str) -> AppResult<PathBuf> {
    let Some(rest) = path.strip_prefix("~/") else {
        return Ok(PathBuf::from(path));
    };

    let home = dirs::home_dir()
        .ok_or_else(|| AppError::Config("unable to resolve home directory".to_string()))?;
    Ok(home.join(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_absolute_paths_alone() {
        let path = expand_home("/home/root/some-file").expect("expand");
        assert_eq!(path, PathBuf::from("/home/root/some-file"));
    }

    #[test]
    fn expands_leading_tilde() {
        let path = expand_home("~/.aws/config").expect("expand");
        assert!(!path.starts_with("~"));
        assert!(path.ends_with(".aws/config"));
    }

    #[test]
    fn only_expands_tilde_followed_by_slash() {
        let path = expand_home("~other/config").expect("expand");
        assert_eq!(path, PathBuf::from("~other/config"));
    }
}
