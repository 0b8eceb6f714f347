use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\S+").expect("valid regex");
}

/// The only characters stripped from the end of a word.
pub const PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

fn is_punctuation(c: char) -> bool { PUNCTUATION.contains(&c) }

/// Words excluded from the index. Matched verbatim against lower-cased keywords,
/// so a capitalized entry in the noise file never filters anything.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self { Self::default() }

    /// Parse a noise-word list. Every whitespace-delimited word is one entry.
    pub fn parse(text: &str) -> Self {
        tokens(text).collect()
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}

/// Split text into whitespace-delimited tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Turn a raw token into an indexable keyword.
///
/// The token must start with a letter. After the first letter, a run of trailing
/// punctuation is allowed and stripped, but nothing may follow it: `"word?!"` becomes
/// `"word"`, while `"don't"` and `"a.m."` are rejected. The result is lower-cased and
/// dropped if it is a noise word.
///
/// Only [`PUNCTUATION`] may trail the letters. Any other non-letter rejects the token,
/// so `"word1"` and `"said\""` are not keywords, although a looser rule that cut at
/// the first non-letter of any kind would have kept `"word"` and `"said"`.
pub fn normalize_keyword(token: &str, noise: &NoiseWords) -> Option<String> {
    let mut chars = token.char_indices();
    let (_, first) = chars.next()?;
    if !first.is_alphabetic() {
        return None;
    }

    let mut boundary: Option<usize> = None;
    for (pos, c) in chars {
        if c.is_alphabetic() {
            if boundary.is_some() {
                return None;
            }
        } else if is_punctuation(c) {
            boundary.get_or_insert(pos);
        } else {
            return None;
        }
    }

    let keyword = token[..boundary.unwrap_or(token.len())].to_lowercase();
    if noise.contains(&keyword) {
        return None;
    }
    Some(keyword)
}

/// All keywords of a text, in order, with non-keywords skipped.
pub fn keywords<'a>(text: &'a str, noise: &'a NoiseWords) -> impl Iterator<Item = String> + 'a {
    tokens(text).filter_map(move |t| normalize_keyword(t, noise))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_punctuation() {
        let noise = NoiseWords::new();
        assert_eq!(normalize_keyword("Word!!", &noise).as_deref(), Some("word"));
        assert_eq!(normalize_keyword("word?!?!", &noise).as_deref(), Some("word"));
        assert_eq!(normalize_keyword("a.", &noise).as_deref(), Some("a"));
    }

    #[test]
    fn rejects_letters_after_punctuation() {
        let noise = NoiseWords::new();
        assert_eq!(normalize_keyword("a.m.", &noise), None);
        assert_eq!(normalize_keyword("end.Start", &noise), None);
    }

    #[test]
    fn noise_file_is_split_on_whitespace() {
        let noise = NoiseWords::parse("the\nis  a\n\n");
        assert_eq!(noise.len(), 3);
        assert!(noise.contains("a"));
    }
}
