// src/lib.rs

//! Conan-to-Meson build configuration bridge
//!
//! Two independent pieces, composed only through what they write:
//!
//! - Toolchain generation: translate declared recipe options and platform
//!   settings into Meson project options and per-compiler flag sets.
//! - Dependency location: resolve the include/lib directories of a package
//!   in the Conan cache, probing fallback directory layouts, and emit them
//!   in a line protocol consumed by the build setup.
//!
//! Neither piece compiles or links anything; both only produce
//! configuration values and path strings for external tools.

pub mod context;
mod error;
pub mod locate;
pub mod options;
pub mod toolchain;

pub use context::{BuildType, CompilerFamily, Os, PlatformContext};
pub use error::{Error, Result};
pub use locate::{CacheLookup, ConanCache, DependencyLocation, Outcome};
pub use options::{CATCH2_REF, OptionSet, OptionSpec, RECOGNIZED_OPTIONS};
pub use toolchain::{CPP_STD, CompilerFlags, ProjectOptions, Toolchain};
