/// Tag index loading
///
/// A collection ships one or more tag source files, each a JSON object
/// mapping image identifier to its record. Selecting a source in the
/// sidebar loads that file wholesale; there is no incremental update.
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::BrowserError;
use crate::state::record::TagIndex;

/// List the available tag sources: the sorted stems of every `*.json`
/// file in `dir`.
pub fn discover_sources(dir: &Path) -> Result<Vec<String>, BrowserError> {
    let mut stems = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.extension().is_some_and(|ext| ext == "json") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                stems.push(stem.to_string());
            }
        }
    }

    stems.sort();
    Ok(stems)
}

/// Full path of the source file for a source stem.
pub fn source_path(dir: &Path, source: &str) -> PathBuf {
    dir.join(format!("{source}.json"))
}

/// Load a whole tag index from one source file.
///
/// A missing or malformed file is an error; there is no fallback source.
pub async fn load_index(path: PathBuf) -> Result<TagIndex, BrowserError> {
    if !path.exists() {
        return Err(BrowserError::SourceNotFound { path });
    }

    let bytes = tokio::fs::read(&path).await?;
    let index: TagIndex = serde_json::from_slice(&bytes)?;

    log::info!("loaded {} records from {}", index.len(), path.display());

    Ok(index)
}

/// Tags of one image. Unknown identifiers are an error; the source data
/// is assumed consistent.
pub fn tags_of<'a>(index: &'a TagIndex, id: &str) -> Result<&'a BTreeSet<String>, BrowserError> {
    index
        .get(id)
        .map(|record| &record.tags)
        .ok_or_else(|| BrowserError::unknown_image(id))
}

/// Raw caption of one image.
pub fn caption_of<'a>(index: &'a TagIndex, id: &str) -> Result<&'a str, BrowserError> {
    index
        .get(id)
        .map(|record| record.raw_caption.as_str())
        .ok_or_else(|| BrowserError::unknown_image(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("inscription-browser-tests")
            .join(format!("{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_discover_sources_sorted_stems() {
        let dir = scratch_dir("discover");
        fs::write(dir.join("zeta.json"), "{}").unwrap();
        fs::write(dir.join("alpha.json"), "{}").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let sources = discover_sources(&dir).unwrap();
        assert_eq!(sources, vec!["alpha", "zeta"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_discover_sources_missing_dir() {
        let dir = std::env::temp_dir().join("inscription-browser-no-such-dir");
        assert!(discover_sources(&dir).is_err());
    }

    #[test]
    fn test_source_path() {
        let path = source_path(Path::new("tag_files"), "ord_tags");
        assert_eq!(path, Path::new("tag_files").join("ord_tags.json"));
    }

    #[tokio::test]
    async fn test_load_index_missing_file() {
        let path = std::env::temp_dir().join("inscription-browser-missing.json");
        let result = load_index(path).await;

        assert!(matches!(result, Err(BrowserError::SourceNotFound { .. })));
    }

    #[tokio::test]
    async fn test_load_index_malformed_file() {
        let dir = scratch_dir("malformed");
        let path = dir.join("bad.json");
        fs::write(&path, "not json").unwrap();

        let result = load_index(path).await;
        assert!(matches!(result, Err(BrowserError::Json(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_load_index_and_lookups() {
        let dir = scratch_dir("load");
        let path = dir.join("good.json");
        fs::write(
            &path,
            r#"{"img1": {"tags": ["x"], "raw": "first"}, "img2": {}}"#,
        )
        .unwrap();

        let index = load_index(path).await.unwrap();
        assert_eq!(index.len(), 2);

        assert!(tags_of(&index, "img1").unwrap().contains("x"));
        assert_eq!(caption_of(&index, "img1").unwrap(), "first");

        // A record without tags has an empty tag set
        assert!(tags_of(&index, "img2").unwrap().is_empty());

        // Unknown ids propagate a lookup failure
        assert!(matches!(
            tags_of(&index, "nope"),
            Err(BrowserError::UnknownImage { .. })
        ));
        assert!(caption_of(&index, "nope").is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
