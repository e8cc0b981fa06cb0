// src/locate.rs

//! Locate a dependency's include/lib directories in the Conan cache
//!
//! Asks `conan cache path <reference>` for the package's base directory,
//! then probes candidate directory layouts for an `include`/`lib` pair.
//! Resolution never fails the caller: any error from the cache query is
//! logged and downgraded to NotFound, and the output protocol carries the
//! result to the build tool as labeled lines on stdout.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, error};

/// Candidate subdirectory layouts, probed in order; first full match wins.
/// The leading empty entry re-checks the base directory itself.
pub const FALLBACK_LAYOUTS: &[&str] = &["", "build", "install", "package"];

/// Resolved include/lib directory pair, separators normalized to `/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyLocation {
    pub include_path: String,
    pub library_path: String,
}

/// Result of a resolution attempt, as observed by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(DependencyLocation),
    NotFound,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Cache-path query capability, seamed out so resolution logic can be
/// exercised against fixture directories in tests
pub trait CacheLookup {
    /// Base installation directory for a package reference
    fn base_path(&self, reference: &str) -> Result<PathBuf>;
}

/// Cache lookup backed by the Conan CLI
pub struct ConanCache {
    conan: PathBuf,
}

impl ConanCache {
    /// Use a specific Conan binary name or path
    pub fn new(conan: impl Into<PathBuf>) -> Self {
        Self {
            conan: conan.into(),
        }
    }
}

impl Default for ConanCache {
    fn default() -> Self {
        Self::new("conan")
    }
}

impl CacheLookup for ConanCache {
    fn base_path(&self, reference: &str) -> Result<PathBuf> {
        let conan = which::which(&self.conan).map_err(|e| {
            Error::CacheQuery(format!("{}: {}", self.conan.display(), e))
        })?;
        debug!("Querying cache path: {} cache path {}", conan.display(), reference);

        let output = Command::new(&conan)
            .args(["cache", "path", reference])
            .output()
            .map_err(|e| Error::CacheQuery(format!("Failed to run conan: {}", e)))?;

        if !output.status.success() {
            return Err(Error::CacheQuery(format!(
                "conan cache path {} failed: {}",
                reference,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let base = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if base.is_empty() {
            return Err(Error::CacheQuery(format!(
                "conan cache path {} returned no path",
                reference
            )));
        }
        Ok(PathBuf::from(base))
    }
}

/// Resolve a dependency's include/lib pair
///
/// Errors from the cache query are contained here: they are logged to the
/// diagnostic stream and mapped to `Outcome::NotFound`, never propagated.
pub fn resolve(lookup: &dyn CacheLookup, reference: &str) -> Outcome {
    let base = match lookup.base_path(reference) {
        Ok(base) => base,
        Err(e) => {
            error!("Error detecting {}: {}", reference, e);
            return Outcome::NotFound;
        }
    };
    debug!("Cache base for {}: {}", reference, base.display());

    // Primary layout: include/ and lib/ directly under the base
    if let Some(location) = probe(&base) {
        return Outcome::Found(location);
    }

    // Fallback layouts, in order; the empty candidate re-probes the base
    for candidate in FALLBACK_LAYOUTS {
        let dir = if candidate.is_empty() {
            base.clone()
        } else {
            base.join(candidate)
        };
        if let Some(location) = probe(&dir) {
            debug!("Found {} under fallback layout '{}'", reference, candidate);
            return Outcome::Found(location);
        }
    }

    Outcome::NotFound
}

/// Check one directory for the include/lib pair; both must exist
fn probe(dir: &Path) -> Option<DependencyLocation> {
    let include = dir.join("include");
    let lib = dir.join("lib");
    if include.exists() && lib.exists() {
        Some(DependencyLocation {
            include_path: normalized(&include),
            library_path: normalized(&lib),
        })
    } else {
        None
    }
}

/// Render a path with forward slashes regardless of host conventions
fn normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Protocol lines written to stdout for the build tool
pub fn render(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Found(location) => vec![
            format!("CATCH2_INCLUDE={}", location.include_path),
            format!("CATCH2_LIB={}", location.library_path),
        ],
        Outcome::NotFound => vec!["CATCH2_NOT_FOUND=1".to_string()],
    }
}
