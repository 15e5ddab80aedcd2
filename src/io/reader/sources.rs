//! Input file resolution.
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;

/// Extensions of files picked up in a source directory.
const EXTENSIONS: [&str; 2] = ["jsonl", "jsonl.gz"];

/// List the files designated by `src`, in lexicographic order.
///
/// `src` can be a file, a directory (its `.jsonl` and `.jsonl.gz` files are taken)
/// or a glob pattern.
pub fn source_files(src: &Path) -> Result<Vec<PathBuf>, Error> {
    if src.is_file() {
        return Ok(vec![src.to_path_buf()]);
    }

    let patterns: Vec<String> = if src.is_dir() {
        EXTENSIONS
            .iter()
            .map(|ext| src.join(format!("*.{}", ext)).to_string_lossy().into_owned())
            .collect()
    } else {
        vec![src.to_string_lossy().into_owned()]
    };

    let mut files = Vec::new();
    for pattern in patterns {
        debug!("looking for files matching {}", pattern);
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(Error::Custom(format!("no input file found at {:?}", src)));
    }

    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    #[test]
    fn directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jsonl", "a.jsonl.gz", "notes.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = source_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jsonl.gz", "b.jsonl"]);
    }

    #[test]
    fn single_file_and_glob() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revisions.jsonl");
        File::create(&path).unwrap();

        assert_eq!(source_files(&path).unwrap(), vec![path.clone()]);
        assert_eq!(
            source_files(&dir.path().join("rev*.jsonl")).unwrap(),
            vec![path]
        );
    }

    #[test]
    fn nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(source_files(dir.path()).is_err());
    }
}
