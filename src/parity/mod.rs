//! PAR2 recovery set identification
//!
//! This module works out which PAR2 files belong together, using nothing but
//! their filenames. File contents are never read.
//!
//! ## Architecture
//!
//! - [`parse_set_name`] / [`RecoveryFile`]: pure filename parsing into a set
//!   name and an optional [`Exponents`] range
//! - [`scan_directory`]: lists one directory, keeps `.par2` files, and groups
//!   them into [`RecoverySets`]
//!
//! ## Usage
//!
//! ```no_run
//! use par2_sets::parity::scan_directory;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sets = scan_directory("/downloads/movie")?;
//!     for set in &sets {
//!         println!(
//!             "{}: {} file(s), {} recovery block(s)",
//!             set.name,
//!             set.files.len(),
//!             set.recovery_block_count()
//!         );
//!     }
//!     Ok(())
//! }
//! ```

mod recovery_file;
mod recovery_set;

pub use recovery_file::{Exponents, RecoveryFile, parse_set_name};
pub use recovery_set::{
    RecoverySet, RecoverySets, scan_directory, scan_directory_async, scan_directory_with,
};
