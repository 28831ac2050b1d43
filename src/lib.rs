//! epwrap - run javac with the Error Prone static analyzer
//!
//! Detects the Java runtime's major version and builds the matching
//! compiler command line: the `-Xplugin:ErrorProne` form with module
//! exports on JDK 10+, or `ErrorProneCompiler` on the boot classpath for
//! older runtimes. The binary then replaces itself with that command.

pub mod adapter;
pub mod cli;
pub mod config;
pub mod error;
pub mod flags;
pub mod invocation;
pub mod version;
