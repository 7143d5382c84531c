use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppResult;

const DEFAULT_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-southeast-1",
    "ap-southeast-2",
    "ca-central-1",
    "cn-north-1",
    "cn-northwest-1",
    "eu-central-1",
    "eu-north-1",
    "eu-south-1",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "me-south-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-gov-east-1",
    "us-gov-west-1",
    "us-west-1",
    "us-west-2",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub regions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            regions: default_regions(),
        }
    }
}

impl Settings {
    pub fn regions(&self) -> &[String] {
        &self.regions
    }
}

pub fn default_regions() -> Vec<String> {
    DEFAULT_REGIONS.iter().map(|region| region.to_string()).collect()
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.is_file() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(&path)?;
    let mut settings: Settings = if raw.trim().is_empty() {
        Settings::default()
    } else {
        serde_yaml_ng::from_str(&raw)?
    };

    if settings.regions.is_empty() {
        settings.regions = default_regions();
    }

    Ok(settings)
}
