//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

use crate::domain::arguments::Arguments;

#[derive(Debug, Parser)]
#[command(name = "fbmod-config")]
#[command(about = "Resolve FB-Mod runtime configuration from file, environment and arguments")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Explicit runtime config file (overrides FB_MOD_CONFIG)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Data source mirror URL or directory
    #[arg(long = "data-source", global = true)]
    data_source: Option<String>,

    /// Comma-separated metadata provider order
    #[arg(long = "provider-order", global = true)]
    provider_order: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the resolved runtime properties (default)
    Config,
    /// List supported environment variables
    Env,
    /// Resolve the API key for a provider
    ApiKey {
        /// Provider name, e.g. `themoviedb` or `fanart.tv`
        name: String,
        /// Bundled default used when nothing else is configured
        #[arg(long, default_value = "")]
        fallback: String,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    InspectConfig(Arguments),
    DescribeEnv,
    ApiKey {
        args: Arguments,
        name: String,
        fallback: String,
    },
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    pub fn into_action(self) -> CliAction {
        let args = Arguments {
            config_path: self.config,
            data_source: self.data_source,
            provider_order: self.provider_order,
        };

        match self.command {
            None | Some(Commands::Config) => CliAction::InspectConfig(args),
            Some(Commands::Env) => CliAction::DescribeEnv,
            Some(Commands::ApiKey { name, fallback }) => CliAction::ApiKey {
                args,
                name,
                fallback,
            },
        }
    }
}
