pub mod corpus;
pub mod error;
pub mod index;
pub mod occurrence;
pub mod search;
pub mod tokenizer;

pub use error::{IndexError, Result};
pub use index::{InvertedIndex, KeywordMap};
pub use occurrence::{insert_last_occurrence, Occurrence};
pub use search::MAX_RESULTS;
pub use tokenizer::{normalize_keyword, NoiseWords};
