use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;
use crate::select::PromptSelector;
use crate::store::FileConfigStore;

#[derive(Debug)]
pub struct AppContext {
    pub paths: AppPaths,
    pub store: FileConfigStore,
    pub selector: PromptSelector,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(paths: AppPaths, json: bool) -> Self {
        Self {
            paths,
            store: FileConfigStore::new(),
            selector: PromptSelector,
            output: Output::new(json),
        }
    }

    /// Reads the settings file; only commands that need the region list call this.
    pub fn settings(&self) -> AppResult<Settings> {
        config::load_settings(&self.paths)
    }
}
