use tracing::{debug, info};

use crate::config::AppPaths;
use crate::profile::{
    ProfileCatalog, set_selected_assumed_profile_as_default, set_selected_profile_as_default,
};
use crate::select::{ProfileSelector, SelectionError, trim_selection};
use crate::store::{ConfigReader, ConfigWriter};

use super::Outcome;

/// Selects a profile and makes it the default in the credentials and config files.
///
/// The two files are written one after the other; when the second write fails the
/// first one is not rolled back.
pub struct SetWorkflow<'a> {
    paths: &'a AppPaths,
    reader: &'a dyn ConfigReader,
    writer: &'a dyn ConfigWriter,
    selector: &'a dyn ProfileSelector,
}

impl<'a> SetWorkflow<'a> {
    pub fn new(
        paths: &'a AppPaths,
        reader: &'a dyn ConfigReader,
        writer: &'a dyn ConfigWriter,
        selector: &'a dyn ProfileSelector,
    ) -> Self {
        Self {
            paths,
            reader,
            writer,
            selector,
        }
    }

    pub fn run(&self, pattern: &str) -> Outcome {
        let credentials_path = self.paths.credentials_path();
        let config_path = self.paths.config_path();

        let mut credentials = match self.reader.read(credentials_path) {
            Ok(file) => file,
            Err(err) => return Outcome::failure(format!("Fail to read AWS credentials file: {err}")),
        };
        let mut config = match self.reader.read(config_path) {
            Ok(file) => file,
            Err(err) => return Outcome::failure(format!("Fail to read AWS config file: {err}")),
        };

        let catalog = ProfileCatalog::build(&credentials, &config);
        debug!(
            credentials = catalog.credentials_profiles().len(),
            assumed = catalog.config_assumed_profiles().len(),
            "loaded profiles"
        );

        let selected = match self.selector.select_profile(&catalog, pattern) {
            Ok(selected) => selected,
            Err(SelectionError::Cancelled) => {
                info!("profile selection cancelled");
                return Outcome::success("");
            }
            Err(err) => return Outcome::failure(format!("Failed to select profile: {err}")),
        };
        let selected = trim_selection(&selected);

        if let Some(profile) = catalog.find_in_credentials(selected) {
            set_selected_profile_as_default(&profile.profile_name, &mut credentials, &mut config);

            if let Err(err) = self.writer.write(&credentials, credentials_path) {
                return Outcome::failure(err.to_string());
            }
            if let Err(err) = self.writer.write(&config, config_path) {
                return Outcome::failure(err.to_string());
            }

            info!(profile = %profile.profile_name, "default profile updated from credentials");
            return Outcome::success(format!(
                "=== [{}] -> [default] ({credentials_path})",
                profile.profile_name
            ));
        }

        if let Some(profile) = catalog.find_in_config(selected) {
            set_selected_assumed_profile_as_default(&profile.profile_name, &mut config);

            if let Err(err) = self.writer.write(&config, config_path) {
                return Outcome::failure(err.to_string());
            }

            info!(profile = %profile.profile_name, "default profile now assumes role");
            return Outcome::success(format!(
                "=== [{}] -> [default] ({config_path})",
                profile.profile_name
            ));
        }

        Outcome::failure(format!(
            "=== profile [{selected}] not found in either credentials or config file"
        ))
    }
}
