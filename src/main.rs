//! `fbmod-config` 바이너리 진입점.

use fbmod_config::interface::cli::{Cli, CliAction};
use fbmod_config::interface::composition::AppComposition;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig(args) => {
            match composition.inspect_config_usecase().execute(&args) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
        CliAction::DescribeEnv => {
            println!("{}", composition.describe_env_usecase().execute());
        }
        CliAction::ApiKey {
            args,
            name,
            fallback,
        } => {
            let key = composition
                .resolve_api_key_usecase()
                .execute(&args, &name, &fallback);
            if key.is_empty() {
                eprintln!("error: no API key configured for {name}");
                std::process::exit(1);
            }
            println!("{key}");
        }
    }
}
