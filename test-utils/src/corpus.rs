use std::{io::Result, path::PathBuf};

use crate::resolve_path;

const ASSET: &str = "corpus";

/// Resolves the path to the two line corpus.
///
/// ```text
/// the cat sat
/// the dog ran
/// ```
pub fn small() -> Result<PathBuf> {
    resolve_path(&[ASSET, "small.txt"])
}

/// Resolves the path to the first lines of the Penn Treebank training corpus.
pub fn sample() -> Result<PathBuf> {
    resolve_path(&[ASSET, "sample.txt"])
}
