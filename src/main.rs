use anyhow::Result;
use clap::Parser;
use smellmap::cli::{Cli, Commands};
use smellmap::commands::{analyze, check, init, Overrides};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config,
            max_function_length,
            max_parameters,
            max_nesting,
            nested_scopes,
            exclude,
            no_parallel,
        } => analyze::analyze_project(analyze::AnalyzeConfig {
            path,
            format: format.into(),
            output,
            config_file: config,
            overrides: Overrides {
                max_function_length,
                max_parameters,
                max_nesting,
                nested_scopes: nested_scopes.map(Into::into),
                exclude,
                no_parallel,
            },
        }),
        Commands::Check {
            path,
            config,
            fail_on,
            exclude,
            no_parallel,
        } => {
            let passed = check::check_project(check::CheckConfig {
                path,
                config_file: config,
                fail_on: fail_on.into(),
                overrides: Overrides {
                    exclude,
                    no_parallel,
                    ..Default::default()
                },
            })?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Init { force } => init::init_config(force),
    }
}
