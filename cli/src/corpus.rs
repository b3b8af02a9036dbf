use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Read every `.txt` file directly inside `dir` as UTF-8, keyed by file name.
/// Subdirectories are not entered. A missing directory or a directory with no
/// `.txt` files is a fatal startup error.
pub fn load_corpus(dir: &Path) -> Result<BTreeMap<String, String>> {
    if !dir.is_dir() {
        bail!("corpus directory {} does not exist", dir.display());
    }

    let mut files = BTreeMap::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        files.insert(entry.file_name().to_string_lossy().into_owned(), text);
    }

    if files.is_empty() {
        bail!("no .txt files found in {}", dir.display());
    }
    tracing::info!(num_files = files.len(), "corpus loaded");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_only_top_level_txt_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join("b.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.txt"), "ignored too").unwrap();

        let files = load_corpus(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files["a.txt"], "alpha");
    }

    #[test]
    fn missing_directory_is_fatal() {
        assert!(load_corpus(Path::new("/nonexistent/corpus")).is_err());
    }

    #[test]
    fn empty_corpus_is_fatal() {
        let dir = tempdir().unwrap();
        assert!(load_corpus(dir.path()).is_err());
    }
}
