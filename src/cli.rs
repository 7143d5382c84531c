use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::paths::{DEFAULT_CONFIG_PATH, DEFAULT_CREDENTIALS_PATH, DEFAULT_SETTINGS_PATH};

#[derive(Debug, Parser)]
#[command(
    name = "aws-profile",
    version,
    about = "Switch the default AWS profile in the shared credentials and config files"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "AWS_SHARED_CREDENTIALS_FILE",
        default_value = DEFAULT_CREDENTIALS_PATH,
        help = "Path to AWS credentials file"
    )]
    pub credentials_path: String,
    #[arg(
        long,
        global = true,
        env = "AWS_CONFIG_FILE",
        default_value = DEFAULT_CONFIG_PATH,
        help = "Path to AWS config file"
    )]
    pub config_path: String,
    #[arg(
        long,
        global = true,
        env = "AWS_PROFILE_CONFIG",
        default_value = DEFAULT_SETTINGS_PATH,
        help = "Path to aws-profile settings file"
    )]
    pub settings_path: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set default profile with credentials of selected profile
    Set(PatternArgs),
    /// Set the region of the default profile
    SetRegion,
    /// Get current AWS profile
    Get,
    /// Get current region set in default profile
    GetRegion,
    /// List profiles from the credentials and config files
    List(PatternArgs),
    /// Print commands to unset AWS credentials environment variables
    Unset,
    /// Show aws-profile version
    Version,
}

#[derive(Debug, Args)]
pub struct PatternArgs {
    #[arg(help = "Filter profiles by given pattern")]
    pub pattern: Option<String>,
}

impl PatternArgs {
    pub fn pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or_default()
    }
}
