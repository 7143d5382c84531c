use crate::config::AppPaths;
use crate::profile::current::{find_assumed_default, find_credentials_default};
use crate::store::ConfigReader;

use super::Outcome;

/// Reports which profile the `default` sections currently mirror.
pub fn run(paths: &AppPaths, reader: &dyn ConfigReader) -> Outcome {
    let config = match reader.read(paths.config_path()) {
        Ok(file) => file,
        Err(err) => return Outcome::failure(format!("Fail to read AWS config file: {err}")),
    };
    if let Some(name) = find_assumed_default(&config) {
        return Outcome::success(name);
    }

    let credentials = match reader.read(paths.credentials_path()) {
        Ok(file) => file,
        Err(err) => return Outcome::failure(format!("Fail to read AWS credentials file: {err}")),
    };

    Outcome::success(find_credentials_default(&credentials).unwrap_or_default())
}
