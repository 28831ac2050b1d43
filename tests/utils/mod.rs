// Integration test utilities
//
// Builds a throwaway JDK layout: a `java` script printing a version banner
// and a `javac` script echoing its arguments, one per line.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ORACLE_8_BANNER: &str = r#"java version "1.8.0_212"
Java(TM) SE Runtime Environment (build 1.8.0_212-b10)
Java HotSpot(TM) 64-Bit Server VM (build 25.212-b10, mixed mode)"#;

pub const OPENJDK_11_BANNER: &str = r#"openjdk version "11.0.2" 2019-01-15
OpenJDK Runtime Environment 18.9 (build 11.0.2+9)
OpenJDK 64-Bit Server VM 18.9 (build 11.0.2+9, mixed mode)"#;

/// Fake JDK living in a temporary directory
pub struct FakeJdk {
    pub dir: TempDir,
    pub java: PathBuf,
    pub javac: PathBuf,
}

impl FakeJdk {
    /// `java -version` prints `banner` on stderr; any other `java` or `javac`
    /// call prints its arguments and exits with `exit_code`
    pub fn new(banner: &str, exit_code: i32) -> Self {
        let dir = TempDir::new().unwrap();
        let banner_file = dir.path().join("banner.txt");
        fs::write(&banner_file, banner).unwrap();

        let java = dir.path().join("java");
        write_script(
            &java,
            &format!(
                "if [ \"$1\" = \"-version\" ]; then cat '{}' >&2; exit 0; fi\n\
                 printf '%s\\n' \"$@\"\n\
                 exit {}\n",
                banner_file.display(),
                exit_code
            ),
        );

        let javac = dir.path().join("javac");
        write_script(&javac, &format!("printf '%s\\n' \"$@\"\nexit {}\n", exit_code));

        Self { dir, java, javac }
    }

    pub fn java(&self) -> &str {
        self.java.to_str().unwrap()
    }

    pub fn javac(&self) -> &str {
        self.javac.to_str().unwrap()
    }
}

pub fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{}", body)).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

/// Output lines of a finished command
pub fn lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|l| l.to_string())
        .collect()
}
