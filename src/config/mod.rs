pub mod paths;
pub mod settings;

pub use paths::{AppPaths, expand_home};
pub use settings::Settings;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths) -> AppResult<Settings> {
    settings::load(expand_home(paths.settings_path())?)
}
