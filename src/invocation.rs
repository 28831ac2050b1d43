//! Compiler command line construction and process replacement

use serde::Serialize;
use std::os::unix::process::CommandExt;
use std::process::Command;

use crate::config::AdapterConfig;
use crate::error::AdapterError;
use crate::flags;
use crate::version::JavaVersion;

/// How Error Prone is attached to the compilation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// JDK 10+: javac with `-Xplugin:ErrorProne` and module exports
    Plugin,
    /// Older JDKs: run `ErrorProneCompiler` on the boot classpath
    Bootclasspath,
}

impl Strategy {
    /// Pick the strategy for a detected major version
    pub fn for_major(major: u32, config: &AdapterConfig) -> Self {
        if major >= config.module_system_threshold {
            Strategy::Plugin
        } else {
            Strategy::Bootclasspath
        }
    }
}

/// Paths and arguments handed over by the build system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub runtime: String,
    pub compiler: String,
    pub tool: String,
    pub javac_args: Vec<String>,
}

/// A fully built command line, ready to replace the current process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Executable to run
    pub program: String,
    /// Full argument vector, `args[0]` being `program`
    pub args: Vec<String>,
    pub strategy: Strategy,
}

impl Invocation {
    /// Build the invocation for the detected runtime version
    pub fn build(version: &JavaVersion, request: &Request, config: &AdapterConfig) -> Self {
        let strategy = Strategy::for_major(version.major(), config);
        tracing::debug!("java {} -> {:?} strategy", version, strategy);
        match strategy {
            Strategy::Plugin => Self::plugin(request, config),
            Strategy::Bootclasspath => Self::bootclasspath(request, config),
        }
    }

    /// `javac <exports> -processorpath <tool> -XDcompilePolicy=byfile
    /// "-Xplugin:ErrorProne <flags>" <javac args minus -Xep: flags>`
    pub fn plugin(request: &Request, config: &AdapterConfig) -> Self {
        let reconciled = flags::reconcile(&config.analysis_flags, &request.javac_args);
        for flag in reconciled.relocated(&config.analysis_flags) {
            tracing::debug!("Relocated {} into plugin argument", flag);
        }

        let plugin_arg = std::iter::once(config.plugin_token.as_str())
            .chain(reconciled.flags.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");

        let mut args = Vec::with_capacity(
            config.exports.len() + reconciled.javac_args.len() + 5,
        );
        args.push(request.compiler.clone());
        args.extend(config.exports.iter().cloned());
        args.push(config.processor_path_flag.clone());
        args.push(request.tool.clone());
        args.push(config.compile_policy.clone());
        args.push(plugin_arg);
        args.extend(reconciled.javac_args);

        Self {
            program: request.compiler.clone(),
            args,
            strategy: Strategy::Plugin,
        }
    }

    /// `java -Xbootclasspath/p:<tool> ErrorProneCompiler <default flags> <javac args>`
    ///
    /// Caller arguments are passed through verbatim, `-Xep:` flags included.
    pub fn bootclasspath(request: &Request, config: &AdapterConfig) -> Self {
        let mut args = Vec::with_capacity(
            config.analysis_flags.len() + request.javac_args.len() + 3,
        );
        args.push(request.runtime.clone());
        args.push(format!("{}{}", config.bootclasspath_prefix, request.tool));
        args.push(config.entry_class.clone());
        args.extend(config.analysis_flags.iter().cloned());
        args.extend(request.javac_args.iter().cloned());

        Self {
            program: request.runtime.clone(),
            args,
            strategy: Strategy::Bootclasspath,
        }
    }

    /// Replace the current process with this invocation
    ///
    /// Only returns if the exec itself failed.
    pub fn exec(&self) -> AdapterError {
        tracing::debug!("exec {:?}", self.args);
        let (arg0, rest) = self
            .args
            .split_first()
            .map_or((&self.program, &[][..]), |(first, rest)| (first, rest));
        let source = Command::new(&self.program).arg0(arg0).args(rest).exec();
        AdapterError::Exec {
            program: self.program.clone(),
            source,
        }
    }
}
