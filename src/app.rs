use crate::cli::{Cli, Command};
use crate::commands::set::SetWorkflow;
use crate::commands::set_region::SetRegionWorkflow;
use crate::commands::unset::Shell;
use crate::commands::{self, Outcome};
use crate::config::AppPaths;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<Outcome> {
    let Cli {
        credentials_path,
        config_path,
        settings_path,
        json,
        verbose: _,
        command,
    } = cli;

    let paths = AppPaths::new(credentials_path, config_path, settings_path);
    let ctx = AppContext::bootstrap(paths, json);

    let outcome = match command {
        Command::Set(args) => {
            SetWorkflow::new(&ctx.paths, &ctx.store, &ctx.store, &ctx.selector).run(args.pattern())
        }
        Command::SetRegion => {
            let settings = ctx.settings()?;
            SetRegionWorkflow::new(
                &ctx.paths,
                settings.regions(),
                &ctx.store,
                &ctx.store,
                &ctx.selector,
            )
            .run()
        }
        Command::Get => commands::get::run(&ctx.paths, &ctx.store),
        Command::GetRegion => commands::get_region::run(&ctx.paths, &ctx.store),
        Command::List(args) => commands::list::run(&ctx.paths, &ctx.store, args.pattern()),
        Command::Unset => commands::unset::run(Shell::current()),
        Command::Version => commands::version::run(env!("CARGO_PKG_VERSION")),
    };

    ctx.output.emit(&outcome)?;
    Ok(outcome)
}
