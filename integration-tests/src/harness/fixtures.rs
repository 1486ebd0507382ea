use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One combined log line, newline terminated.
pub fn access_line(time: &str, method: &str, resource: &str, status: &str, bytes: &str) -> String {
    format!(
        "93.180.71.3 - - [{time}] \"{method} {resource} HTTP/1.1\" {status} {bytes} \"-\" \"Debian APT-HTTP/1.3\"\n"
    )
}

/// Two rotated access logs with known statistics.
///
/// `access.log` holds six lines from 17 May 2015, `access.log.1` four lines
/// from 18 May 2015 plus one line that does not parse.
pub fn rotated_logs() -> [(&'static str, String); 2] {
    let current = [
        access_line("17/May/2015:08:05:32 +0000", "GET", "/downloads/product_1", "304", "0"),
        access_line("17/May/2015:08:05:23 +0000", "GET", "/downloads/product_1", "304", "0"),
        access_line("17/May/2015:08:05:24 +0000", "GET", "/downloads/product_2", "200", "490"),
        access_line("17/May/2015:08:05:34 +0000", "GET", "/downloads/product_2", "404", "336"),
        access_line("17/May/2015:08:05:09 +0000", "HEAD", "/downloads/product_1", "200", "0"),
        access_line("17/May/2015:08:05:57 +0000", "GET", "/downloads/product_1", "404", "332"),
    ];
    let rotated = [
        access_line("18/May/2015:10:05:02 +0000", "POST", "/api/upload", "500", "1024"),
        access_line("18/May/2015:10:05:45 +0000", "GET", "/downloads/product_2", "200", "2582"),
        access_line("18/May/2015:10:06:01 +0000", "GET", "/downloads/product_1", "200", "3316"),
        "this line is not an access log entry\n".to_string(),
        access_line("18/May/2015:10:06:12 +0000", "GET", "/downloads/product_2", "304", "0"),
    ];

    [
        ("access.log", current.concat()),
        ("access.log.1", rotated.concat()),
    ]
}

/// Temporary directory holding log files for one test.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// A directory with the [`rotated_logs`] fixture written into it.
    pub fn rotated() -> Self {
        let dir = Self::new();
        for (name, content) in rotated_logs() {
            dir.write(name, &content);
        }
        dir
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Glob pattern for files in this directory.
    pub fn pattern(&self, glob: &str) -> String {
        format!("{}/{}", self.dir.path().display(), glob)
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}
