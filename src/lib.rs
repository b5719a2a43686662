//! # par2-sets
//!
//! Identify the members of PAR2 recovery sets from filenames alone.
//!
//! Given one filename, extract the set name and, for numbered recovery
//! volumes (`name.vol<start>+<count>.par2`), the inclusive range of
//! recovery block exponents the volume holds. Given a directory, group every
//! `.par2` file in it by set name.
//!
//! Nothing here reads, verifies, or repairs PAR2 packet data.
//!
//! ## Quick Start
//!
//! ```
//! use par2_sets::{Exponents, RecoveryFile};
//!
//! let file = RecoveryFile::from_path("/downloads/movie.vol07+08.par2")?;
//! assert_eq!(file.set_name, "movie");
//! assert_eq!(file.exponents, Some(Exponents { minimum: 7, maximum: 14 }));
//! # Ok::<(), par2_sets::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// PAR2 filename parsing and recovery set grouping
pub mod parity;

// Re-export commonly used types
pub use config::ScanConfig;
pub use error::{Error, Result};
pub use parity::{
    Exponents, RecoveryFile, RecoverySet, RecoverySets, parse_set_name, scan_directory,
    scan_directory_async, scan_directory_with,
};
