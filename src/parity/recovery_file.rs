//! PAR2 filename parsing: set name and volume exponent range.
//!
//! Recognized shapes:
//! - `<name>.par2` (index file, no exponents)
//! - `<name>.vol<start>+<count>.par2` (recovery volume covering `start..=start+count-1`)
//!
//! The extension may be `par2` or `PAR2`, never mixed case. Matching never fails:
//! a name that fits neither shape yields an empty set name and no exponents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

/// Leftmost search for `<name>` followed by any number of `.vol` segments and the extension.
///
/// Group 1 is the set name (shortest possible), group 2 is the whole run of volume segments.
#[allow(clippy::expect_used)] // constant pattern
static PAR2_FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+?)((?:\.vol\d+\+\d+)*)\.(?:par2|PAR2)")
        .expect("PAR2 filename pattern is valid")
});

/// The volume segment next to the extension, taken from the run captured above.
#[allow(clippy::expect_used)] // constant pattern
static VOLUME_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.vol(\d+)\+(\d+)$").expect("volume segment pattern is valid")
});

/// Inclusive range of recovery block exponents held by a volume file.
///
/// `minimum <= maximum` is not enforced: a volume named `.vol5+0` gives
/// `minimum = 5, maximum = 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exponents {
    /// First exponent in the volume
    pub minimum: i64,
    /// Last exponent in the volume (inclusive)
    pub maximum: i64,
}

impl Exponents {
    /// Build the range for a volume that starts at `start` and holds `count` blocks.
    ///
    /// `maximum` is `start + count - 1` with two's-complement wrapping, so an end
    /// past `i64::MAX` comes back negative and the range is degenerate.
    pub fn from_start_count(start: i64, count: i64) -> Self {
        Self {
            minimum: start,
            maximum: start.wrapping_add(count.wrapping_sub(1)),
        }
    }

    /// Number of exponents covered, or 0 when `maximum < minimum`
    pub fn block_count(&self) -> u64 {
        if self.is_degenerate() {
            0
        } else {
            self.maximum.abs_diff(self.minimum).saturating_add(1)
        }
    }

    /// Whether the range is empty (`maximum < minimum`)
    pub fn is_degenerate(&self) -> bool {
        self.maximum < self.minimum
    }

    /// Whether `exponent` lies inside the range
    pub fn contains(&self, exponent: i64) -> bool {
        self.minimum <= exponent && exponent <= self.maximum
    }
}

impl fmt::Display for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.minimum, self.maximum)
    }
}

/// One PAR2 file, identified by name only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryFile {
    /// Absolute, lexically normalized path (existence is not checked)
    pub path: PathBuf,
    /// Set name taken from the filename, empty if the name is not a PAR2 name
    pub set_name: String,
    /// Exponent range for volume files, `None` for index files and unmatched names
    pub exponents: Option<Exponents>,
}

impl RecoveryFile {
    /// Parse a PAR2 file from its path.
    ///
    /// The path is made absolute and `.`/`..` components are resolved without
    /// touching the filesystem, then the leaf name is parsed. A leaf name that
    /// is not valid UTF-8 is parsed lossily, so its set name may contain U+FFFD
    /// and can collide with another file's set name.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if the path cannot be made absolute (an empty
    /// path, or no readable current directory). Names that do not match the
    /// PAR2 grammar are not errors.
    pub fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = normalize(&std::path::absolute(path.as_ref())?);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::from_file_name(path, &name))
    }

    /// Build a record for `path` from an already extracted leaf `file_name`.
    pub fn from_file_name(path: PathBuf, file_name: &str) -> Self {
        let (set_name, exponents) = parse_set_name(file_name);
        Self {
            path,
            set_name,
            exponents,
        }
    }

    /// Whether this is a numbered recovery volume
    pub fn is_volume(&self) -> bool {
        self.exponents.is_some()
    }

    /// Leaf filename of `path`
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Extract the set name and exponent range from a PAR2 leaf filename.
///
/// Returns `("", None)` if the name has no `.par2`/`.PAR2` extension. When a
/// volume numeral does not parse as an `i64` the name is kept and the
/// exponents are `None`.
///
/// ```
/// use par2_sets::parity::{Exponents, parse_set_name};
///
/// let (name, exponents) = parse_set_name("movie.vol03+04.par2");
/// assert_eq!(name, "movie");
/// assert_eq!(exponents, Some(Exponents { minimum: 3, maximum: 6 }));
///
/// assert_eq!(parse_set_name("movie.par2"), ("movie".to_string(), None));
/// assert_eq!(parse_set_name("movie.mkv"), (String::new(), None));
/// ```
pub fn parse_set_name(file_name: &str) -> (String, Option<Exponents>) {
    let Some(caps) = PAR2_FILE_NAME.captures(file_name) else {
        trace!(file_name, "not a PAR2 filename");
        return (String::new(), None);
    };

    let set_name = caps.get(1).map_or("", |m| m.as_str()).to_string();
    let volumes = caps.get(2).map_or("", |m| m.as_str());

    let exponents = VOLUME_SEGMENT.captures(volumes).and_then(|seg| {
        let start = seg[1].parse::<i64>();
        let count = seg[2].parse::<i64>();
        match (start, count) {
            (Ok(start), Ok(count)) => Some(Exponents::from_start_count(start, count)),
            _ => {
                debug!(file_name, "volume numerals do not fit in i64, ignoring");
                None
            }
        }
    });

    (set_name, exponents)
}

/// Resolve `.` and `..` components lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` never removes the root
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
