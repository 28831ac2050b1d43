//! Error Prone analysis flags
//!
//! Callers may pass `-Xep:` flags mixed in with ordinary javac arguments.
//! For the plugin invocation those flags must travel inside the single
//! `-Xplugin:ErrorProne ...` argument, so they are pulled out of the javac
//! arguments and merged after the defaults.

/// Prefix of every analysis flag
pub const ANALYSIS_FLAG_PREFIX: &str = "-Xep:";

/// Returns true if `arg` configures an Error Prone check
pub fn is_analysis_flag(arg: &str) -> bool {
    arg.starts_with(ANALYSIS_FLAG_PREFIX)
}

/// Analysis flags and javac arguments after relocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// Defaults first, then caller flags in order of appearance, no duplicates
    pub flags: Vec<String>,
    /// Caller arguments minus every entry in `flags`, order preserved
    pub javac_args: Vec<String>,
}

impl Reconciled {
    /// Caller flags that were moved out of the javac arguments
    pub fn relocated<'a>(&'a self, defaults: &'a [String]) -> impl Iterator<Item = &'a String> {
        self.flags.iter().filter(move |f| !defaults.contains(f))
    }
}

/// Merge caller analysis flags into the defaults and strip them from the
/// javac arguments
///
/// Neither input is modified.
pub fn reconcile(defaults: &[String], javac_args: &[String]) -> Reconciled {
    let mut flags: Vec<String> = Vec::with_capacity(defaults.len());
    for flag in defaults {
        if !flags.contains(flag) {
            flags.push(flag.clone());
        }
    }
    for arg in javac_args.iter().filter(|a| is_analysis_flag(a)) {
        if !flags.contains(arg) {
            flags.push(arg.clone());
        }
    }

    let javac_args = javac_args
        .iter()
        .filter(|a| !flags.contains(a))
        .cloned()
        .collect();

    Reconciled { flags, javac_args }
}
