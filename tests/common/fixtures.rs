//! Scratch directories populated with PAR2-named files

use std::path::PathBuf;
use tempfile::TempDir;

/// A typical posted release: one index file plus growing recovery volumes
pub const RELEASE_FILES: &[&str] = &[
    "Release.Name.par2",
    "Release.Name.vol000+001.par2",
    "Release.Name.vol001+002.par2",
    "Release.Name.vol003+004.par2",
    "Release.Name.vol007+008.par2",
];

/// Create a temporary directory containing empty files with the given names
pub fn dir_with_files(names: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    for name in names {
        std::fs::write(dir.path().join(name), b"").expect("failed to create fixture file");
    }
    dir
}

/// Leaf filenames of a list of paths
pub fn file_names<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) -> Vec<String> {
    paths
        .into_iter()
        .map(|p| {
            p.file_name()
                .expect("fixture path has a file name")
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}
