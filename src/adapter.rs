//! Compiler invocation adapter
//!
//! Ties version detection and command construction together:
//! detect version -> pick strategy -> build argv -> replace process.

use std::path::Path;

use crate::config::AdapterConfig;
use crate::error::{AdapterError, Result};
use crate::invocation::{Invocation, Request};
use crate::version::{self, JavaVersion};

/// Invocation prepared for a specific runtime
#[derive(Debug, Clone)]
pub struct Prepared {
    pub version: JavaVersion,
    pub invocation: Invocation,
}

/// Error Prone javac adapter
#[derive(Debug, Clone, Default)]
pub struct Adapter {
    config: AdapterConfig,
}

impl Adapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Detect the runtime version and build the compiler invocation
    ///
    /// Fails with [`AdapterError::VersionUndetermined`] before anything is
    /// built when the runtime banner is not recognized.
    pub fn prepare(&self, request: &Request) -> Result<Prepared> {
        let version = version::detect(Path::new(&request.runtime))?;
        Ok(self.prepare_for(version, request))
    }

    /// Build the compiler invocation for an already known version
    pub fn prepare_for(&self, version: JavaVersion, request: &Request) -> Prepared {
        let invocation = Invocation::build(&version, request, &self.config);
        Prepared {
            version,
            invocation,
        }
    }

    /// Prepare and exec; returns only on failure
    pub fn run(&self, request: &Request) -> AdapterError {
        match self.prepare(request) {
            Ok(prepared) => prepared.invocation.exec(),
            Err(e) => e,
        }
    }
}
