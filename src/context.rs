// src/context.rs

//! Platform and compiler context for a single build invocation
//!
//! Mirrors the settings the package manager hands to a recipe: operating
//! system, compiler identity and version, build type, and architecture.
//! Supplied once per invocation and never mutated.

use std::fmt;

/// Target operating system, as declared in the package manager's settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Os {
    Linux,
    Windows,
    Macos,
    /// Any other settings value (FreeBSD, Android, ...)
    Other(String),
}

impl Os {
    /// Parse a settings value like "Linux" or "Windows"
    pub fn from_setting(s: &str) -> Self {
        match s {
            "Linux" => Self::Linux,
            "Windows" => Self::Windows,
            "Macos" => Self::Macos,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "Linux"),
            Self::Windows => write!(f, "Windows"),
            Self::Macos => write!(f, "Macos"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Build type, as declared in the package manager's settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildType {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
    Other(String),
}

impl BuildType {
    /// Parse a settings value like "Release" or "Debug"
    pub fn from_setting(s: &str) -> Self {
        match s {
            "Debug" => Self::Debug,
            "Release" => Self::Release,
            "RelWithDebInfo" => Self::RelWithDebInfo,
            "MinSizeRel" => Self::MinSizeRel,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_release(&self) -> bool {
        matches!(self, Self::Release)
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "Debug"),
            Self::Release => write!(f, "Release"),
            Self::RelWithDebInfo => write!(f, "RelWithDebInfo"),
            Self::MinSizeRel => write!(f, "MinSizeRel"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Compiler family for flag generation
///
/// The Unknown arm is deliberate: identities outside the known set produce
/// an empty flag set, and making that case a variant keeps the silent
/// fallthrough visible in the type system and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerFamily {
    Gcc,
    Clang,
    Msvc,
    Unknown,
}

impl CompilerFamily {
    /// Classify a compiler identity string from the package manager's
    /// settings. Matching is exact: "apple-clang" and friends are Unknown.
    pub fn classify(identity: &str) -> Self {
        match identity {
            "gcc" => Self::Gcc,
            "clang" => Self::Clang,
            "msvc" | "Visual Studio" => Self::Msvc,
            _ => Self::Unknown,
        }
    }
}

/// Immutable record of the platform settings for one build invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformContext {
    pub os: Os,
    /// Compiler identity as declared (e.g. "gcc", "msvc", "Visual Studio")
    pub compiler: String,
    pub compiler_version: Option<String>,
    pub build_type: BuildType,
    pub arch: String,
}

impl PlatformContext {
    pub fn new(
        os: Os,
        compiler: impl Into<String>,
        compiler_version: Option<String>,
        build_type: BuildType,
        arch: impl Into<String>,
    ) -> Self {
        Self {
            os,
            compiler: compiler.into(),
            compiler_version,
            build_type,
            arch: arch.into(),
        }
    }

    /// Compiler family derived from the declared identity
    pub fn compiler_family(&self) -> CompilerFamily {
        CompilerFamily::classify(&self.compiler)
    }
}
