use tracing::info;

use crate::config::AppPaths;
use crate::profile::set_selected_region_as_default;
use crate::select::{SelectionError, ValueSelector, trim_selection};
use crate::store::{ConfigReader, ConfigWriter};

use super::Outcome;

const REGION_TITLE: &str = "Select an AWS region";

/// Selects a region and writes it to the config `default` section only.
pub struct SetRegionWorkflow<'a> {
    paths: &'a AppPaths,
    regions: &'a [String],
    reader: &'a dyn ConfigReader,
    writer: &'a dyn ConfigWriter,
    selector: &'a dyn ValueSelector,
}

impl<'a> SetRegionWorkflow<'a> {
    pub fn new(
        paths: &'a AppPaths,
        regions: &'a [String],
        reader: &'a dyn ConfigReader,
        writer: &'a dyn ConfigWriter,
        selector: &'a dyn ValueSelector,
    ) -> Self {
        Self {
            paths,
            regions,
            reader,
            writer,
            selector,
        }
    }

    pub fn run(&self) -> Outcome {
        let config_path = self.paths.config_path();
        let mut config = match self.reader.read(config_path) {
            Ok(file) => file,
            Err(err) => return Outcome::failure(format!("Fail to read AWS config file: {err}")),
        };

        let selected = match self.selector.select_value(self.regions, REGION_TITLE) {
            Ok(selected) => selected,
            Err(SelectionError::Cancelled) => {
                info!("region selection cancelled");
                return Outcome::success("");
            }
            Err(err) => return Outcome::failure(format!("Failed to select region: {err}")),
        };
        let region = trim_selection(&selected);

        set_selected_region_as_default(region, &mut config);
        if let Err(err) = self.writer.write(&config, config_path) {
            return Outcome::failure(err.to_string());
        }

        info!(region, "default region updated");
        Outcome::success(format!(
            "=== [region {region}] -> [default.region] ({config_path})"
        ))
    }
}
