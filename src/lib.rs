pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod profile;
pub mod select;
pub mod store;

use cli::Cli;
use commands::Outcome;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<Outcome> {
    app::run(cli)
}
