use crate::corpus::{load_document, load_document_list, load_noise_words, CorpusPaths};
use crate::error::Result;
use crate::occurrence::{insert_last_occurrence, Occurrence};
use crate::tokenizer::{keywords, NoiseWords};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Keywords of a single document, each with its frequency in that document.
pub type KeywordMap = HashMap<String, Occurrence>;

/// Keyword -> occurrences across the corpus, sorted by descending frequency.
#[derive(Debug, Default, Serialize)]
pub struct InvertedIndex {
    keywords: HashMap<String, Vec<Occurrence>>,
    #[serde(skip)]
    noise: NoiseWords,
}

/// Count the keywords of a document's text.
pub fn scan_text(document: &str, text: &str, noise: &NoiseWords) -> KeywordMap {
    let mut kws = KeywordMap::new();
    for keyword in keywords(text, noise) {
        kws.entry(keyword).or_insert_with(|| Occurrence::new(document, 0)).frequency += 1;
    }
    kws
}

/// Read a listed document from disk and count its keywords.
pub fn scan_document(paths: &CorpusPaths, document: &str, noise: &NoiseWords) -> Result<KeywordMap> {
    let text = load_document(paths, document)?;
    let kws = scan_text(document, &text, noise);
    tracing::debug!(document, keywords = kws.len(), "scanned document");
    Ok(kws)
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn with_noise_words(noise: NoiseWords) -> Self { Self { keywords: HashMap::new(), noise } }

    /// Index every document named in `docs_file`, skipping the words in `noise_file`.
    /// Any missing file aborts the whole build.
    pub fn build<D: AsRef<Path>, N: AsRef<Path>>(docs_file: D, noise_file: N) -> Result<Self> {
        let paths = CorpusPaths::new(docs_file, noise_file);
        let noise = load_noise_words(&paths)?;
        let documents = load_document_list(&paths)?;

        let mut index = Self::with_noise_words(noise);
        for document in &documents {
            let kws = scan_document(&paths, document, &index.noise)?;
            index.merge_keywords(kws);
        }
        tracing::info!(
            documents = documents.len(),
            keywords = index.len(),
            noise_words = index.noise.len(),
            "index build complete"
        );
        Ok(index)
    }

    /// Fold one document's keywords into the index, keeping every list sorted.
    pub fn merge_keywords(&mut self, kws: KeywordMap) {
        for (keyword, occurrence) in kws {
            let occs = self.keywords.entry(keyword).or_default();
            occs.push(occurrence);
            insert_last_occurrence(occs);
        }
    }

    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    /// Indexed keywords in alphabetical order.
    pub fn keywords(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.keywords.keys().map(String::as_str).collect();
        out.sort_unstable();
        out
    }

    pub fn noise_words(&self) -> &NoiseWords { &self.noise }

    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }
}
