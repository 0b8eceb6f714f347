//! Loading the plain-text inputs of an index build: the document list, the
//! noise-word list and the documents themselves.

use crate::error::{IndexError, Result};
use crate::tokenizer::{tokens, NoiseWords};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct CorpusPaths {
    pub docs: PathBuf,
    pub noise: PathBuf,
}

impl CorpusPaths {
    pub fn new<D: AsRef<Path>, N: AsRef<Path>>(docs: D, noise: N) -> Self {
        Self { docs: docs.as_ref().to_path_buf(), noise: noise.as_ref().to_path_buf() }
    }

    /// Where a listed document lives on disk: the identifier is a path, relative
    /// ones resolve against the working directory.
    pub fn resolve(&self, document: &str) -> PathBuf { PathBuf::from(document) }
}

/// Read a whole file as text. Failing to open it is `NotFound`, failing to read it is `Read`.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_text(path: &Path) -> Result<String> {
    let mut f = File::open(path).map_err(|source| IndexError::NotFound { path: path.to_path_buf(), source })?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).map_err(|source| IndexError::Read { path: path.to_path_buf(), source })?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn load_noise_words(paths: &CorpusPaths) -> Result<NoiseWords> {
    let text = read_text(&paths.noise)?;
    Ok(NoiseWords::parse(&text))
}

/// Document identifiers, in listed order.
pub fn load_document_list(paths: &CorpusPaths) -> Result<Vec<String>> {
    let text = read_text(&paths.docs)?;
    Ok(tokens(&text).map(str::to_string).collect())
}

pub fn load_document(paths: &CorpusPaths, document: &str) -> Result<String> {
    read_text(&paths.resolve(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_paths_are_used_as_given() {
        let paths = CorpusPaths::new("corpus/docs.txt", "noise.txt");
        assert_eq!(paths.resolve("corpus/a.txt"), PathBuf::from("corpus/a.txt"));
        assert_eq!(paths.resolve("a.txt"), PathBuf::from("a.txt"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_text(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), Path::new("/definitely/not/here.txt"));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xe9 cat cat").unwrap();
        let text = read_text(&path).unwrap();
        assert_eq!(text, "caf\u{fffd} cat cat");
    }
}
