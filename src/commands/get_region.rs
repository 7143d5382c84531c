use crate::config::AppPaths;
use crate::profile::keys::{DEFAULT_SECTION, REGION};
use crate::store::ConfigReader;

use super::Outcome;

pub fn run(paths: &AppPaths, reader: &dyn ConfigReader) -> Outcome {
    let config = match reader.read(paths.config_path()) {
        Ok(file) => file,
        Err(err) => return Outcome::failure(format!("Fail to read AWS config file: {err}")),
    };

    let region = config
        .section(DEFAULT_SECTION)
        .and_then(|section| section.get(REGION))
        .filter(|region| !region.is_empty());

    match region {
        Some(region) => Outcome::success(region),
        None => Outcome::success("no region set"),
    }
}
