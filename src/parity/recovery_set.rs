//! Grouping the PAR2 files of a directory into recovery sets

use super::recovery_file::RecoveryFile;
use crate::config::ScanConfig;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace};

/// All files of one recovery set, in the order the directory listing returned them
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecoverySet {
    /// Set name shared by every file in the group
    pub name: String,
    /// Member files in encounter order
    pub files: Vec<RecoveryFile>,
}

impl RecoverySet {
    /// Files without an exponent range (normally the single `<name>.par2`)
    pub fn index_files(&self) -> impl Iterator<Item = &RecoveryFile> {
        self.files.iter().filter(|f| !f.is_volume())
    }

    /// Numbered recovery volumes
    pub fn volumes(&self) -> impl Iterator<Item = &RecoveryFile> {
        self.files.iter().filter(|f| f.is_volume())
    }

    /// Sum of the block counts claimed by the volume names.
    ///
    /// Overlapping or duplicate ranges are counted as many times as they appear.
    pub fn recovery_block_count(&self) -> u64 {
        self.files
            .iter()
            .filter_map(|f| f.exponents)
            .fold(0u64, |total, e| total.saturating_add(e.block_count()))
    }
}

/// Recovery sets found by one directory scan, in first-seen order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecoverySets {
    sets: Vec<RecoverySet>,
}

impl RecoverySets {
    /// Group records by set name, keeping encounter order within and across groups
    pub fn from_records(records: impl IntoIterator<Item = RecoveryFile>) -> Self {
        let mut sets: Vec<RecoverySet> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            match index.get(&record.set_name) {
                Some(&i) => sets[i].files.push(record),
                None => {
                    index.insert(record.set_name.clone(), sets.len());
                    sets.push(RecoverySet {
                        name: record.set_name.clone(),
                        files: vec![record],
                    });
                }
            }
        }

        Self { sets }
    }

    /// Number of distinct set names
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no PAR2 files were found
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Look up a set by name
    pub fn get(&self, name: &str) -> Option<&RecoverySet> {
        self.sets.iter().find(|s| s.name == name)
    }

    /// Set names in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|s| s.name.as_str())
    }

    /// Iterate over the sets
    pub fn iter(&self) -> std::slice::Iter<'_, RecoverySet> {
        self.sets.iter()
    }

    /// Flatten into `(set name, files)` pairs, in first-seen order
    pub fn into_map(self) -> Vec<(String, Vec<RecoveryFile>)> {
        self.sets.into_iter().map(|s| (s.name, s.files)).collect()
    }
}

impl IntoIterator for RecoverySets {
    type Item = RecoverySet;
    type IntoIter = std::vec::IntoIter<RecoverySet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecoverySets {
    type Item = &'a RecoverySet;
    type IntoIter = std::slice::Iter<'a, RecoverySet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}

/// Scan `directory` (not recursively) and group its `.par2` files by set name.
///
/// Only lower-case `.par2` files are considered; see [`ScanConfig`] to change
/// the filter.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be read. No partial result is
/// returned.
pub fn scan_directory(directory: impl AsRef<Path>) -> Result<RecoverySets> {
    scan_directory_with(directory, &ScanConfig::default())
}

/// Scan `directory` with an explicit [`ScanConfig`].
///
/// # Errors
///
/// Returns [`Error::Config`] if the config is invalid, or [`Error::Io`] if the
/// directory cannot be read.
pub fn scan_directory_with(
    directory: impl AsRef<Path>,
    config: &ScanConfig,
) -> Result<RecoverySets> {
    config.validate()?;
    let directory = directory.as_ref();

    debug!(?directory, extension = %config.extension, "scanning for PAR2 files");

    let mut records = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if is_directory(&entry)? {
            trace!(?path, "skipping directory");
            continue;
        }

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        let extension = file_name.rfind('.').map(|i| &file_name[i + 1..]);
        if !extension.is_some_and(|ext| config.matches_extension(ext)) {
            trace!(?path, "skipping non-PAR2 file");
            continue;
        }

        records.push(RecoveryFile::from_path(&path)?);
    }

    let sets = RecoverySets::from_records(records);

    debug!(
        ?directory,
        set_count = sets.len(),
        file_count = sets.iter().map(|s| s.files.len()).sum::<usize>(),
        "PAR2 scan complete"
    );

    Ok(sets)
}

/// Async variant of [`scan_directory_with`], run on the blocking thread pool.
///
/// # Errors
///
/// Same as [`scan_directory_with`], plus [`Error::TaskFailed`] if the
/// blocking task panics or is cancelled.
pub async fn scan_directory_async(
    directory: impl AsRef<Path>,
    config: ScanConfig,
) -> Result<RecoverySets> {
    let directory = directory.as_ref().to_path_buf();
    tokio::task::spawn_blocking(move || scan_directory_with(&directory, &config))
        .await
        .map_err(|e| Error::TaskFailed(format!("directory scan task panicked: {}", e)))?
}

/// Whether a listing entry is a directory, following symlinks.
///
/// A symlink whose target cannot be resolved (dangling, or not permitted)
/// counts as a file.
fn is_directory(entry: &std::fs::DirEntry) -> Result<bool> {
    let file_type = entry.file_type()?;
    if file_type.is_symlink() {
        return Ok(std::fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()));
    }
    Ok(file_type.is_dir())
}
