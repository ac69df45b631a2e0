use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::info;

use super::errors::AppError;

/// Entry names present in only one of two directories, each list sorted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirDiff {
    pub only_left: Vec<String>,
    pub only_right: Vec<String>,
}

impl DirDiff {
    pub fn is_empty(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty()
    }
}

fn entry_names(dir: &Path) -> Result<BTreeSet<String>, AppError> {
    let mut names = BTreeSet::new();
    for entry in fs::read_dir(dir)? {
        names.insert(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

pub fn compare_dirs(left: &Path, right: &Path) -> Result<DirDiff, AppError> {
    let left_names = entry_names(left)?;
    let right_names = entry_names(right)?;

    Ok(DirDiff {
        only_left: left_names.difference(&right_names).cloned().collect(),
        only_right: right_names.difference(&left_names).cloned().collect(),
    })
}

/// Print the names missing from either side.
pub fn run_compare(left: &Path, right: &Path) -> Result<DirDiff, AppError> {
    let diff = compare_dirs(left, right)?;
    if diff.is_empty() {
        info!("{} and {} hold the same files", left.display(), right.display());
        return Ok(diff);
    }

    for name in &diff.only_left {
        println!("{name} not found in {}", right.display());
    }
    for name in &diff.only_right {
        println!("{name} not found in {}", left.display());
    }

    Ok(diff)
}
