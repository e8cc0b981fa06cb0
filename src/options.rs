// src/options.rs

//! Recipe options: the recognized option table, defaults, and platform pruning
//!
//! The option surface is fixed at design time. Each option is boolean, has a
//! documented default, and `fPIC` is pruned on Windows where
//! position-independent code is not a meaningful toggle.

use crate::context::Os;
use crate::error::{Error, Result};

/// Test framework dependency, required only when tests are enabled
pub const CATCH2_REF: &str = "catch2/3.5.0";

/// A recognized option with its documented default and effect
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub default: bool,
    pub effect: &'static str,
    /// Removed from the option set when the target OS is Windows
    pub windows_pruned: bool,
}

/// The full recognized-option table, in declaration order
pub const RECOGNIZED_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        name: "fPIC",
        default: true,
        effect: "position-independent code generation",
        windows_pruned: true,
    },
    OptionSpec {
        name: "enable_tests",
        default: true,
        effect: "gate test-framework dependency and test generation",
        windows_pruned: false,
    },
    OptionSpec {
        name: "enable_docs",
        default: true,
        effect: "gate documentation generation",
        windows_pruned: false,
    },
    OptionSpec {
        name: "with_benchmarks",
        default: false,
        effect: "gate benchmark generation",
        windows_pruned: false,
    },
];

/// Declared option values for one build invocation
///
/// `fpic` is `None` once pruned for a Windows target; the other options are
/// always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    fpic: Option<bool>,
    pub enable_tests: bool,
    pub enable_docs: bool,
    pub with_benchmarks: bool,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl OptionSet {
    /// Option set with every recognized option at its documented default
    pub fn defaults() -> Self {
        Self {
            fpic: Some(true),
            enable_tests: true,
            enable_docs: true,
            with_benchmarks: false,
        }
    }

    /// Set a recognized option by name
    pub fn set(&mut self, name: &str, value: bool) -> Result<()> {
        match name {
            "fPIC" => self.fpic = Some(value),
            "enable_tests" => self.enable_tests = value,
            "enable_docs" => self.enable_docs = value,
            "with_benchmarks" => self.with_benchmarks = value,
            _ => return Err(Error::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Apply a `name=value` override string
    pub fn apply_override(&mut self, spec: &str) -> Result<()> {
        let (name, value) = parse_override(spec)?;
        self.set(name, value)
    }

    /// Prune platform-specific options for the target OS
    pub fn pruned_for(mut self, os: &Os) -> Self {
        if os.is_windows() {
            self.fpic = None;
        }
        self
    }

    /// `fPIC` value, or `None` if pruned for this platform
    pub fn fpic(&self) -> Option<bool> {
        self.fpic
    }

    /// Dependency references this option set requires
    pub fn requirements(&self) -> Vec<&'static str> {
        if self.enable_tests {
            vec![CATCH2_REF]
        } else {
            vec![]
        }
    }
}

/// Parse a `name=value` option override
fn parse_override(spec: &str) -> Result<(&str, bool)> {
    let (name, value) = spec
        .split_once('=')
        .ok_or_else(|| Error::ParseError(format!("Expected NAME=VALUE, got '{}'", spec)))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::ParseError(format!(
            "Missing option name in '{}'",
            spec
        )));
    }
    // Conan renders booleans as Python True/False; accept either casing
    let value = match value.trim().to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        other => {
            return Err(Error::ParseError(format!(
                "Expected true or false for option '{}', got '{}'",
                name, other
            )));
        }
    };
    Ok((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let opts = OptionSet::defaults();
        assert_eq!(opts.fpic(), Some(true));
        assert!(opts.enable_tests);
        assert!(opts.enable_docs);
        assert!(!opts.with_benchmarks);
    }

    #[test]
    fn test_table_matches_defaults() {
        let opts = OptionSet::defaults();
        for spec in RECOGNIZED_OPTIONS {
            let actual = match spec.name {
                "fPIC" => opts.fpic().unwrap(),
                "enable_tests" => opts.enable_tests,
                "enable_docs" => opts.enable_docs,
                "with_benchmarks" => opts.with_benchmarks,
                other => panic!("untested option {}", other),
            };
            assert_eq!(actual, spec.default, "default mismatch for {}", spec.name);
        }
    }

    #[test]
    fn test_windows_prunes_fpic() {
        let opts = OptionSet::defaults().pruned_for(&Os::Windows);
        assert_eq!(opts.fpic(), None);

        let opts = OptionSet::defaults().pruned_for(&Os::Linux);
        assert_eq!(opts.fpic(), Some(true));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let mut opts = OptionSet::defaults();
        let err = opts.set("shared", true).unwrap_err();
        assert!(matches!(err, Error::UnknownOption(_)));
    }

    #[test]
    fn test_apply_override() {
        let mut opts = OptionSet::defaults();
        opts.apply_override("enable_docs=false").unwrap();
        assert!(!opts.enable_docs);
        opts.apply_override("with_benchmarks=True").unwrap();
        assert!(opts.with_benchmarks);

        assert!(opts.apply_override("enable_docs").is_err());
        assert!(opts.apply_override("enable_docs=maybe").is_err());
        assert!(opts.apply_override("=true").is_err());
    }

    #[test]
    fn test_requirements_gated_on_tests() {
        let mut opts = OptionSet::defaults();
        assert_eq!(opts.requirements(), vec![CATCH2_REF]);

        opts.set("enable_tests", false).unwrap();
        assert!(opts.requirements().is_empty());
    }
}
