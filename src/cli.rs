// src/cli.rs

//! CLI definitions for the mesonbridge tool
//!
//! Command implementations live in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use mesonbridge::CATCH2_REF;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mesonbridge")]
#[command(version)]
#[command(about = "Bridge Conan settings and options into Meson toolchain configuration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the Meson toolchain configuration from Conan settings
    Toolchain {
        /// Target operating system (Conan settings value, e.g. Linux, Windows)
        #[arg(long, default_value = "Linux")]
        os: String,

        /// Compiler identity (e.g. gcc, clang, msvc, "Visual Studio")
        #[arg(long, default_value = "gcc")]
        compiler: String,

        /// Compiler version (informational)
        #[arg(long)]
        compiler_version: Option<String>,

        /// Build type (e.g. Debug, Release)
        #[arg(long, default_value = "Release")]
        build_type: String,

        /// Target architecture
        #[arg(long, default_value = "x86_64")]
        arch: String,

        /// Override a recipe option (repeatable)
        #[arg(short = 'o', long = "option", value_name = "NAME=VALUE")]
        options: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Meson)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Locate a dependency's include/lib directories in the Conan cache
    Locate {
        /// Package reference to resolve
        #[arg(default_value = CATCH2_REF)]
        reference: String,

        /// Conan binary name or path
        #[arg(long, default_value = "conan")]
        conan: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Meson machine file
    Meson,
    /// Pretty-printed JSON
    Json,
}
