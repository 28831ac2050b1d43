//! Adapter configuration
//!
//! Every literal the adapter emits lives here. `AdapterConfig::default()` is
//! the stock Error Prone setup; a TOML file may override any subset of keys.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Analysis flags applied to every compilation
pub const DEFAULT_ANALYSIS_FLAGS: &[&str] = &[
    "-Xep:FunctionalInterfaceMethodChanged:WARN",
    "-Xep:ReturnValueIgnored:WARN",
];

/// Module-system directives exposing javac internals to the plugin (JDK 10+)
pub const JAVA10_EXPORTS: &[&str] = &[
    "--add-exports=jdk.compiler/com.sun.tools.javac.api=ALL-UNNAMED",
    "--add-exports=jdk.compiler/com.sun.tools.javac.util=ALL-UNNAMED",
    "--add-exports=jdk.compiler/com.sun.tools.javac.tree=ALL-UNNAMED",
    "--add-exports=jdk.compiler/com.sun.tools.javac.main=ALL-UNNAMED",
    "--add-exports=jdk.compiler/com.sun.tools.javac.code=ALL-UNNAMED",
    "--add-exports=jdk.compiler/com.sun.tools.javac.processing=ALL-UNNAMED",
    "--add-exports=jdk.compiler/com.sun.tools.javac.parser=ALL-UNNAMED",
    "--add-exports=jdk.compiler/com.sun.tools.javac.comp=ALL-UNNAMED",
    "--add-opens=jdk.compiler/com.sun.tools.javac.comp=ALL-UNNAMED",
];

/// First major version that runs Error Prone as a javac plugin
pub const MODULE_SYSTEM_THRESHOLD: u32 = 10;

/// Literals used to build the compiler command line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterConfig {
    /// Analysis flags emitted before any caller-supplied ones
    pub analysis_flags: Vec<String>,

    /// Export directives for the modular invocation
    pub exports: Vec<String>,

    /// Major versions at or above this use the plugin invocation
    pub module_system_threshold: u32,

    /// Flag introducing the analysis tool on the processor path
    pub processor_path_flag: String,

    /// Compilation policy the plugin requires
    pub compile_policy: String,

    /// Token that activates the plugin; analysis flags are appended to it
    pub plugin_token: String,

    /// Boot classpath prefix for the legacy invocation
    pub bootclasspath_prefix: String,

    /// Main class of the standalone Error Prone compiler
    pub entry_class: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            analysis_flags: DEFAULT_ANALYSIS_FLAGS.iter().map(|s| s.to_string()).collect(),
            exports: JAVA10_EXPORTS.iter().map(|s| s.to_string()).collect(),
            module_system_threshold: MODULE_SYSTEM_THRESHOLD,
            processor_path_flag: "-processorpath".to_string(),
            compile_policy: "-XDcompilePolicy=byfile".to_string(),
            plugin_token: "-Xplugin:ErrorProne".to_string(),
            bootclasspath_prefix: "-Xbootclasspath/p:".to_string(),
            entry_class: "com.google.errorprone.ErrorProneCompiler".to_string(),
        }
    }
}

impl AdapterConfig {
    /// Load configuration overrides from a TOML file
    ///
    /// Keys missing from the file keep their default values.
    ///
    /// # Example TOML
    /// ```toml
    /// analysis_flags = ["-Xep:ReturnValueIgnored:ERROR"]
    /// module_system_threshold = 9
    /// ```
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content).with_context(|| {
            format!("Failed to parse config file: {}", path.as_ref().display())
        })
    }

    /// Parse configuration overrides from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AdapterConfig =
            toml::from_str(content).context("Invalid adapter configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_matches_constants() {
        let config = AdapterConfig::default();
        assert_eq!(config.analysis_flags, DEFAULT_ANALYSIS_FLAGS);
        assert_eq!(config.exports, JAVA10_EXPORTS);
        assert_eq!(config.module_system_threshold, 10);
        assert_eq!(config.entry_class, "com.google.errorprone.ErrorProneCompiler");
    }

    #[test]
    fn test_exports_end_with_add_opens() {
        assert_eq!(JAVA10_EXPORTS.len(), 9);
        assert!(JAVA10_EXPORTS[..8].iter().all(|e| e.starts_with("--add-exports=")));
        assert!(JAVA10_EXPORTS[8].starts_with("--add-opens="));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AdapterConfig::from_toml_str("").unwrap();
        assert_eq!(config, AdapterConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = AdapterConfig::from_toml_str(
            r#"
            analysis_flags = ["-Xep:NullAway:ERROR"]
            module_system_threshold = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis_flags, vec!["-Xep:NullAway:ERROR"]);
        assert_eq!(config.module_system_threshold, 9);
        assert_eq!(config.exports, JAVA10_EXPORTS);
        assert_eq!(config.plugin_token, "-Xplugin:ErrorProne");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = AdapterConfig::from_toml_str("treshold = 9");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "entry_class = \"org.example.Main\"").unwrap();

        let config = AdapterConfig::from_toml(file.path()).unwrap();
        assert_eq!(config.entry_class, "org.example.Main");
    }

    #[test]
    fn test_from_toml_missing_file() {
        let err = AdapterConfig::from_toml("/nonexistent/epwrap.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
