//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use speako_core::Transcript;

pub mod analyze;
pub mod benchmark;
pub mod info;
pub mod metrics;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod wer;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Load a transcript from disk.
///
/// `.json` files are parsed as a [`Transcript`] with optional word timings;
/// anything else is read as plain text.
pub fn load_transcript(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Transcript> {
    let content = read_input_file(path, max_bytes)?;
    if path.extension() == Some("json") {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse transcript JSON in {path}"))
    } else {
        Ok(Transcript::from_text(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn plain_text_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "talk.txt", "Hello there.");
        let t = load_transcript(&path, None).unwrap();
        assert_eq!(t.text, "Hello there.");
        assert!(t.words.is_empty());
    }

    #[test]
    fn json_transcript_with_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "talk.json",
            r#"{"text":"hi","words":[{"text":"hi","start_time":0.0,"end_time":0.4,"confidence":0.8}]}"#,
        );
        let t = load_transcript(&path, None).unwrap();
        assert_eq!(t.text, "hi");
        assert_eq!(t.words.len(), 1);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "talk.json", "{not json");
        let err = load_transcript(&path, None).unwrap_err();
        assert!(err.to_string().contains("failed to parse transcript JSON"));
    }

    #[test]
    fn size_limit_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "talk.txt", "0123456789");
        let err = read_input_file(&path, Some(5)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert!(read_input_file(&path, Some(10)).is_ok());
        assert!(read_input_file(&path, None).is_ok());
    }
}
