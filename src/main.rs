// src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    // Log to stderr so the locate protocol on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Toolchain {
            os,
            compiler,
            compiler_version,
            build_type,
            arch,
            options,
            format,
            output,
        } => {
            let args = commands::ToolchainArgs {
                os,
                compiler,
                compiler_version,
                build_type,
                arch,
                options,
                format,
                output,
            };
            match commands::toolchain(args) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("{:#}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Locate { reference, conan } => commands::locate(&reference, &conan),
    }
}
