//! Java runtime version detection
//!
//! Runs `<runtime> -version` and reads the major version out of the banner.
//! Two banner shapes are recognized:
//!
//! - `java version "1.8.0_212"` (Oracle style; a leading `1.` is skipped)
//! - `openjdk version "11.0.2"` (token kept as captured)

use regex::Regex;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use crate::error::{AdapterError, Result};

static JAVA_BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^java version "(.+)""#).expect("valid java banner regex"));

static OPENJDK_BANNER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^openjdk version "(.+)""#).expect("valid openjdk banner regex")
});

/// Version reported by a Java runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaVersion {
    token: String,
    major: u32,
}

impl JavaVersion {
    /// Build from a version token, deriving the numeric major version from
    /// its leading digits (`"11.0.2"` -> 11, `"9-ea"` -> 9)
    pub fn from_token(token: &str) -> Option<Self> {
        let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
        let major = digits.parse().ok()?;
        Some(Self {
            token: token.to_string(),
            major,
        })
    }

    /// Version token as extracted from the banner
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Numeric major version used for strategy selection
    pub fn major(&self) -> u32 {
        self.major
    }
}

impl std::fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}

/// Extract the version token from banner text
///
/// Lines are scanned in order and the first matching line wins. Within a
/// line the `java version` form is tried before the `openjdk version` form.
pub fn parse_banner_token(banner: &str) -> Option<String> {
    for line in banner.lines() {
        if let Some(caps) = JAVA_BANNER.captures(line) {
            let mut parts = caps[1].split('.');
            let first = parts.next().unwrap_or_default();
            let token = if first == "1" {
                parts.next().unwrap_or_default()
            } else {
                first
            };
            return Some(token.to_string());
        }
        if let Some(caps) = OPENJDK_BANNER.captures(line) {
            return Some(caps[1].to_string());
        }
    }
    None
}

/// Parse a `-version` banner into a [`JavaVersion`]
pub fn parse_banner(banner: &str) -> Option<JavaVersion> {
    parse_banner_token(banner).and_then(|token| JavaVersion::from_token(&token))
}

/// Query `runtime -version` and parse its banner
///
/// Blocks until the runtime exits. Standard output is read before standard
/// error; most JDKs print the banner on standard error.
pub fn detect(runtime: &Path) -> Result<JavaVersion> {
    let runtime_name = runtime.display().to_string();
    tracing::debug!("Querying version: {} -version", runtime_name);

    let output = Command::new(runtime)
        .arg("-version")
        .output()
        .map_err(|source| AdapterError::VersionQuery {
            runtime: runtime_name.clone(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let banner = format!("{}\n{}", stdout.trim(), stderr.trim());

    match parse_banner(&banner) {
        Some(version) => {
            tracing::debug!("Detected java {} (major {})", version, version.major());
            Ok(version)
        }
        None => {
            tracing::debug!("No version line in banner: {:?}", banner);
            Err(AdapterError::VersionUndetermined { runtime: runtime_name })
        }
    }
}
