use clap::Parser;

fn main() {
    let cli = aws_profile::cli::Cli::parse();
    aws_profile::logging::init(cli.verbose);

    match aws_profile::run(cli) {
        Ok(outcome) if outcome.success => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
