//! Configuration types for par2-sets

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Directory scan configuration
///
/// Controls which directory entries are treated as PAR2 candidates. The
/// filename parser itself is not configurable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Extension (without the leading dot) a file must carry to be scanned (default: "par2")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Compare the extension case-sensitively (default: true)
    ///
    /// With the default, `archive.PAR2` is left out of a scan even though the
    /// filename parser accepts an upper-case `PAR2` extension.
    #[serde(default = "default_true")]
    pub case_sensitive_extension: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            case_sensitive_extension: true,
        }
    }
}

impl ScanConfig {
    /// Check that the configuration can be used for a scan
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the extension is empty or contains a `.`.
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(Error::Config {
                message: "extension must not be empty".to_string(),
                key: Some("extension".to_string()),
            });
        }
        if self.extension.contains('.') {
            return Err(Error::Config {
                message: format!(
                    "extension '{}' must not contain '.' (give it without the leading dot)",
                    self.extension
                ),
                key: Some("extension".to_string()),
            });
        }
        Ok(())
    }

    /// Whether `extension` (text after the last `.`, without the dot) passes the filter
    pub(crate) fn matches_extension(&self, extension: &str) -> bool {
        if self.case_sensitive_extension {
            extension == self.extension
        } else {
            extension.eq_ignore_ascii_case(&self.extension)
        }
    }
}

fn default_extension() -> String {
    "par2".to_string()
}

fn default_true() -> bool {
    true
}
