use std::collections::HashMap;

/// A bidirectional mapping between words and dense indices.
///
/// Indices are assigned in first-seen order, starting at zero and without gaps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vocabulary {
    word_to_index: HashMap<String, usize>,
    index_to_word: Vec<String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the word with the next free index unless it is already present.
    pub fn add_word(&mut self, word: &str) {
        if !self.word_to_index.contains_key(word) {
            let index = self.index_to_word.len();
            self.word_to_index.insert(word.to_string(), index);
            self.index_to_word.push(word.to_string());
        }
    }

    /// Gets the number of distinct words.
    pub fn len(&self) -> usize {
        self.index_to_word.len()
    }

    /// Checks if no word has been added yet.
    pub fn is_empty(&self) -> bool {
        self.index_to_word.is_empty()
    }

    /// Checks if the word is present.
    pub fn contains(&self, word: &str) -> bool {
        self.word_to_index.contains_key(word)
    }

    /// Gets the index of the word.
    pub fn index(&self, word: &str) -> Option<usize> {
        self.word_to_index.get(word).copied()
    }

    /// Gets the word at the index.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.index_to_word.get(index).map(String::as_str)
    }

    /// Iterates over the `(index, word)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.index_to_word
            .iter()
            .enumerate()
            .map(|(index, word)| (index, word.as_str()))
    }
}

impl<'a> Extend<&'a str> for Vocabulary {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        for word in words {
            self.add_word(word);
        }
    }
}
