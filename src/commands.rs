// src/commands.rs

//! Command handlers for the mesonbridge CLI

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use mesonbridge::locate::{self, ConanCache};
use mesonbridge::{BuildType, OptionSet, Os, Outcome, PlatformContext, Toolchain};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

/// Settings and option inputs for toolchain generation
pub struct ToolchainArgs {
    pub os: String,
    pub compiler: String,
    pub compiler_version: Option<String>,
    pub build_type: String,
    pub arch: String,
    pub options: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<std::path::PathBuf>,
}

/// Generate the toolchain configuration and write it out
pub fn toolchain(args: ToolchainArgs) -> Result<()> {
    let ctx = PlatformContext::new(
        Os::from_setting(&args.os),
        args.compiler,
        args.compiler_version,
        BuildType::from_setting(&args.build_type),
        args.arch,
    );

    let mut options = OptionSet::defaults();
    for spec in &args.options {
        options
            .apply_override(spec)
            .with_context(|| format!("Invalid option override '{}'", spec))?;
    }
    let options = options.pruned_for(&ctx.os);

    for reference in options.requirements() {
        info!("Recipe requires {}", reference);
    }

    let generated = Toolchain::generate(&options, &ctx);
    let rendered = match args.format {
        OutputFormat::Meson => generated.to_machine_file(),
        OutputFormat::Json => generated.to_json(),
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote toolchain configuration to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Resolve a dependency in the Conan cache and emit the line protocol
///
/// Stdout carries only the protocol lines; everything else goes to the
/// diagnostic stream. Exit status distinguishes found from not-found.
pub fn locate(reference: &str, conan: &Path) -> ExitCode {
    let cache = ConanCache::new(conan);
    let outcome = locate::resolve(&cache, reference);
    for line in locate::render(&outcome) {
        println!("{}", line);
    }
    match outcome {
        Outcome::Found(_) => ExitCode::SUCCESS,
        Outcome::NotFound => ExitCode::FAILURE,
    }
}
