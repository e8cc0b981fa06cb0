// src/toolchain.rs

//! Toolchain generation: Conan settings and options to Meson configuration
//!
//! This is a pure translation with no I/O. The output has two halves: the
//! project options handed to Meson (string-valued, booleans rendered as
//! lowercase "true"/"false" because Meson reads them textually) and the
//! per-compiler-family flag set exposed to consumers of the packaged
//! artifact. Flag order is preserved; downstream tools deduplicate by first
//! occurrence.

use crate::context::{CompilerFamily, PlatformContext};
use crate::options::OptionSet;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

/// Required C++ standard for the packaged headers
pub const CPP_STD: &str = "23";

/// Ordered string-valued option mapping for the build-generation tool
///
/// Insertion order is preserved so rendered output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOptions {
    entries: Vec<(String, String)>,
}

impl ProjectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any existing value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ProjectOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Ordered compiler flags plus the required language standard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerFlags {
    pub flags: Vec<String>,
    pub cpp_std: String,
}

impl CompilerFlags {
    /// Flag set for a compiler family
    ///
    /// GCC and Clang share the depth flag but differ in how the step limit
    /// is spelled; exactly one of the two limit flags is emitted. Unknown
    /// families get no flags at all, by policy.
    pub fn for_family(family: CompilerFamily) -> Self {
        let flags: Vec<String> = match family {
            CompilerFamily::Msvc => vec![
                "/constexpr:depth2048",
                "/constexpr:steps1048576",
                "/bigobj",
                "/permissive-",
            ],
            CompilerFamily::Gcc => vec!["-fconstexpr-depth=2048", "-fconstexpr-ops-limit=1048576"],
            CompilerFamily::Clang => vec!["-fconstexpr-depth=2048", "-fconstexpr-steps=1048576"],
            CompilerFamily::Unknown => vec![],
        }
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            flags,
            cpp_std: CPP_STD.to_string(),
        }
    }
}

/// Generated toolchain configuration for one build invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toolchain {
    pub project_options: ProjectOptions,
    pub compiler_flags: CompilerFlags,
}

impl Toolchain {
    /// Translate declared options and platform settings into the Meson
    /// toolchain configuration. Pure function: no I/O, no hidden state.
    pub fn generate(options: &OptionSet, ctx: &PlatformContext) -> Self {
        let family = ctx.compiler_family();
        debug!(
            "Generating toolchain: compiler={} ({:?}), build_type={}, os={}",
            ctx.compiler, family, ctx.build_type, ctx.os
        );

        let mut project_options = ProjectOptions::new();
        project_options.set("enable_tests", bool_str(options.enable_tests));
        project_options.set("enable_docs", bool_str(options.enable_docs));
        project_options.set("enable_benchmarks", bool_str(options.with_benchmarks));

        // Derived options are omitted entirely when their condition does
        // not hold; the consumer treats a missing key as its own default.
        if ctx.build_type.is_release() {
            project_options.set("native_optimizations", "true");
        }
        if family == CompilerFamily::Msvc {
            project_options.set("deep_constexpr", "true");
        }

        Self {
            project_options,
            compiler_flags: CompilerFlags::for_family(family),
        }
    }

    /// Render as a Meson machine file
    ///
    /// Project options land in `[project options]`; the standard and flags
    /// in `[built-in options]`. `cpp_args` is omitted when the flag set is
    /// empty.
    pub fn to_machine_file(&self) -> String {
        let mut out = String::new();
        out.push_str("[project options]\n");
        for (key, value) in self.project_options.iter() {
            out.push_str(&format!("{} = '{}'\n", key, value));
        }
        out.push_str("\n[built-in options]\n");
        out.push_str(&format!("cpp_std = 'c++{}'\n", self.compiler_flags.cpp_std));
        if !self.compiler_flags.flags.is_empty() {
            let quoted: Vec<String> = self
                .compiler_flags
                .flags
                .iter()
                .map(|f| format!("'{}'", f))
                .collect();
            out.push_str(&format!("cpp_args = [{}]\n", quoted.join(", ")));
        }
        out
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> String {
        // Serialization of plain strings and vecs cannot fail
        serde_json::to_string_pretty(self).expect("toolchain serialization")
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{BuildType, Os};

    fn ctx(compiler: &str, build_type: &str) -> PlatformContext {
        PlatformContext::new(
            Os::Linux,
            compiler,
            None,
            BuildType::from_setting(build_type),
            "x86_64",
        )
    }

    #[test]
    fn test_passthrough_options() {
        let mut opts = OptionSet::defaults();
        opts.set("enable_docs", false).unwrap();
        opts.set("with_benchmarks", true).unwrap();

        let tc = Toolchain::generate(&opts, &ctx("gcc", "Debug"));
        assert_eq!(tc.project_options.get("enable_tests"), Some("true"));
        assert_eq!(tc.project_options.get("enable_docs"), Some("false"));
        assert_eq!(tc.project_options.get("enable_benchmarks"), Some("true"));
    }

    #[test]
    fn test_native_optimizations_release_only() {
        let opts = OptionSet::defaults();
        let tc = Toolchain::generate(&opts, &ctx("gcc", "Release"));
        assert_eq!(tc.project_options.get("native_optimizations"), Some("true"));

        for build_type in ["Debug", "RelWithDebInfo", "MinSizeRel"] {
            let tc = Toolchain::generate(&opts, &ctx("gcc", build_type));
            assert!(
                !tc.project_options.contains_key("native_optimizations"),
                "native_optimizations must be absent for {}",
                build_type
            );
        }
    }

    #[test]
    fn test_deep_constexpr_msvc_only() {
        let opts = OptionSet::defaults();
        for compiler in ["msvc", "Visual Studio"] {
            let tc = Toolchain::generate(&opts, &ctx(compiler, "Debug"));
            assert_eq!(tc.project_options.get("deep_constexpr"), Some("true"));
        }
        for compiler in ["gcc", "clang", "icc"] {
            let tc = Toolchain::generate(&opts, &ctx(compiler, "Debug"));
            assert!(!tc.project_options.contains_key("deep_constexpr"));
        }
    }

    #[test]
    fn test_clang_flags() {
        let flags = CompilerFlags::for_family(CompilerFamily::Clang);
        assert_eq!(
            flags.flags,
            vec!["-fconstexpr-depth=2048", "-fconstexpr-steps=1048576"]
        );
    }

    #[test]
    fn test_gcc_flags() {
        let flags = CompilerFlags::for_family(CompilerFamily::Gcc);
        assert_eq!(
            flags.flags,
            vec!["-fconstexpr-depth=2048", "-fconstexpr-ops-limit=1048576"]
        );
    }

    #[test]
    fn test_msvc_flags() {
        let flags = CompilerFlags::for_family(CompilerFamily::Msvc);
        assert_eq!(
            flags.flags,
            vec![
                "/constexpr:depth2048",
                "/constexpr:steps1048576",
                "/bigobj",
                "/permissive-"
            ]
        );
    }

    #[test]
    fn test_unknown_compiler_no_flags() {
        let flags = CompilerFlags::for_family(CompilerFamily::Unknown);
        assert!(flags.flags.is_empty());
        // The standard is declared even when no flags are emitted
        assert_eq!(flags.cpp_std, "23");
    }

    #[test]
    fn test_cpp_std_always_set() {
        for family in [
            CompilerFamily::Gcc,
            CompilerFamily::Clang,
            CompilerFamily::Msvc,
            CompilerFamily::Unknown,
        ] {
            assert_eq!(CompilerFlags::for_family(family).cpp_std, "23");
        }
    }

    #[test]
    fn test_generate_is_pure() {
        let opts = OptionSet::defaults();
        let context = ctx("clang", "Release");
        let a = Toolchain::generate(&opts, &context);
        let b = Toolchain::generate(&opts, &context);
        assert_eq!(a, b);
        assert_eq!(a.to_machine_file(), b.to_machine_file());
        assert_eq!(a.to_json(), b.to_json());
    }

    #[test]
    fn test_machine_file_format() {
        let opts = OptionSet::defaults();
        let tc = Toolchain::generate(&opts, &ctx("clang", "Release"));
        assert_eq!(
            tc.to_machine_file(),
            "[project options]\n\
             enable_tests = 'true'\n\
             enable_docs = 'true'\n\
             enable_benchmarks = 'false'\n\
             native_optimizations = 'true'\n\
             \n\
             [built-in options]\n\
             cpp_std = 'c++23'\n\
             cpp_args = ['-fconstexpr-depth=2048', '-fconstexpr-steps=1048576']\n"
        );
    }

    #[test]
    fn test_machine_file_omits_empty_cpp_args() {
        let opts = OptionSet::defaults();
        let tc = Toolchain::generate(&opts, &ctx("icc", "Debug"));
        assert!(!tc.to_machine_file().contains("cpp_args"));
    }

    #[test]
    fn test_project_options_replace_in_place() {
        let mut opts = ProjectOptions::new();
        opts.set("a", "1");
        opts.set("b", "2");
        opts.set("a", "3");
        assert_eq!(opts.get("a"), Some("3"));
        assert_eq!(opts.len(), 2);
        let keys: Vec<&str> = opts.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
