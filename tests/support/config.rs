//! Temporary config files.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A config file (and optional siblings) inside a temp dir that lives as
/// long as this value.
pub struct TempConfig {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TempConfig {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("write temp config");
        Self { dir, path }
    }

    /// Write a sibling file next to the config.
    pub fn with_file(self, name: &str, contents: &str) -> Self {
        fs::write(self.dir.path().join(name), contents).expect("write sibling file");
        self
    }
}

/// Minimal valid config body with one tracked instrument.
pub const MINIMAL: &str = r#"
[[watchlist.entries]]
code = "INFY"
bseCode = "500209"
marketCap = 600000
"#;

/// Config pointing both exchange clients at `base_url` with fast retries.
pub fn stub_exchanges(base_url: &str) -> String {
    format!(
        r#"
[exchanges.nse]
base_url = "{base_url}"

[exchanges.nse.http]
timeout_ms = 2000
retry_max_attempts = 1

[exchanges.bse]
base_url = "{base_url}"
site_url = "{base_url}"
document_base_url = "{base_url}/docs"

[exchanges.bse.http]
timeout_ms = 2000
retry_max_attempts = 1

[[watchlist.entries]]
code = "INFY"
bseCode = "500209"
marketCap = 600000

[[watchlist.entries]]
code = "TINYCO"
bseCode = "999999"
marketCap = 200
"#
    )
}
