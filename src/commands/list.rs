use crate::config::AppPaths;
use crate::profile::ProfileCatalog;
use crate::store::ConfigReader;

use super::Outcome;

/// Lists display names of the profiles matching `pattern`, one per line.
pub fn run(paths: &AppPaths, reader: &dyn ConfigReader, pattern: &str) -> Outcome {
    let credentials = match reader.read(paths.credentials_path()) {
        Ok(file) => file,
        Err(err) => return Outcome::failure(format!("Fail to read AWS credentials file: {err}")),
    };
    let config = match reader.read(paths.config_path()) {
        Ok(file) => file,
        Err(err) => return Outcome::failure(format!("Fail to read AWS config file: {err}")),
    };

    let catalog = ProfileCatalog::build(&credentials, &config);
    let names = if pattern.is_empty() {
        catalog.display_profile_names()
    } else {
        catalog
            .filter(pattern)
            .into_iter()
            .map(|profile| profile.display_profile_name.as_str())
            .collect()
    };

    Outcome::success(names.join("\n"))
}
