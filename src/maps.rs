// 📖 Maps - Dictionary of word definitions
// Thin wrapper over a map with explicit, matchable failure cases

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("could not find word")]
    NotFound,

    #[error("already exists. did not add")]
    WordExists,

    #[error("cannot update because it does not exist")]
    WordDoesNotExist,
}

// ============================================================================
// DICTIONARY
// ============================================================================

/// Word → definition mapping.
///
/// Serializes as a flat JSON object: `{"test": "this is just a test"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary from a JSON object file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary file: {:?}", path))?;

        let dictionary: Dictionary = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse dictionary JSON: {:?}", path))?;

        debug!(path = ?path, words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Look up the definition of `word`
    pub fn search(&self, word: &str) -> Result<&str, DictionaryError> {
        self.entries
            .get(word)
            .map(String::as_str)
            .ok_or(DictionaryError::NotFound)
    }

    /// Add a new word. Existing words are never overwritten.
    pub fn add(
        &mut self,
        word: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<(), DictionaryError> {
        let word = word.into();

        match self.search(&word) {
            Err(DictionaryError::NotFound) => {
                debug!(word = %word, "adding word");
                self.entries.insert(word, definition.into());
                Ok(())
            }
            Ok(_) => Err(DictionaryError::WordExists),
            Err(e) => Err(e),
        }
    }

    /// Replace the definition of a word that is already present
    pub fn update(
        &mut self,
        word: &str,
        definition: impl Into<String>,
    ) -> Result<(), DictionaryError> {
        match self.entries.get_mut(word) {
            Some(existing) => {
                debug!(word = %word, "updating word");
                *existing = definition.into();
                Ok(())
            }
            None => Err(DictionaryError::WordDoesNotExist),
        }
    }

    /// Remove a word; missing words are ignored
    pub fn delete(&mut self, word: &str) {
        if self.entries.remove(word).is_some() {
            debug!(word = %word, "deleted word");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All words, sorted alphabetically
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<W, D> FromIterator<(W, D)> for Dictionary
where
    W: Into<String>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        Dictionary {
            entries: iter
                .into_iter()
                .map(|(word, definition)| (word.into(), definition.into()))
                .collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_dictionary() -> Dictionary {
        [("test", "this is just a test")].into_iter().collect()
    }

    #[test]
    fn test_search_known_word() {
        let dictionary = test_dictionary();
        assert_eq!(dictionary.search("test"), Ok("this is just a test"));
    }

    #[test]
    fn test_search_unknown_word() {
        let dictionary = test_dictionary();
        let err = dictionary.search("unknown").unwrap_err();

        assert_eq!(err, DictionaryError::NotFound);
        assert_eq!(err.to_string(), "could not find word");
    }

    #[test]
    fn test_add_new_word() {
        let mut dictionary = Dictionary::new();

        dictionary.add("test", "this is just a test").unwrap();
        assert_eq!(dictionary.search("test"), Ok("this is just a test"));
    }

    #[test]
    fn test_add_existing_word() {
        let mut dictionary = test_dictionary();

        let result = dictionary.add("test", "new test");

        assert_eq!(result, Err(DictionaryError::WordExists));
        assert_eq!(dictionary.search("test"), Ok("this is just a test"));
    }

    #[test]
    fn test_update_existing_word() {
        let mut dictionary = test_dictionary();

        dictionary.update("test", "new definition").unwrap();
        assert_eq!(dictionary.search("test"), Ok("new definition"));
    }

    #[test]
    fn test_update_missing_word() {
        let mut dictionary = Dictionary::new();

        let result = dictionary.update("test", "new definition");

        assert_eq!(result, Err(DictionaryError::WordDoesNotExist));
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_delete() {
        let mut dictionary = test_dictionary();

        dictionary.delete("test");
        assert_eq!(dictionary.search("test"), Err(DictionaryError::NotFound));
    }

    #[test]
    fn test_delete_missing_word_is_noop() {
        let mut dictionary = test_dictionary();

        dictionary.delete("missing");
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary, test_dictionary());
    }

    #[test]
    fn test_words_sorted() {
        let dictionary: Dictionary = [("pear", "fruit"), ("apple", "fruit"), ("kale", "leaf")]
            .into_iter()
            .collect();

        assert_eq!(dictionary.words(), vec!["apple", "kale", "pear"]);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rust": "a systems language", "test": "this is just a test"}}"#).unwrap();

        let dictionary = Dictionary::from_file(file.path()).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.search("rust"), Ok("a systems language"));
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let err = Dictionary::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse dictionary JSON"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Dictionary::from_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read dictionary file"));
    }
}
