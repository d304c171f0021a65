use ndarray::{Array2, ArrayView2};

use crate::{
    batch::{reshape, Windows},
    vocab::Vocabulary,
    CorpusError,
};

/// A loaded corpus.
///
/// Bundles the vocabulary with the batch matrix of token ids of shape
/// `(batch_size, sequence_length)`.
#[derive(Clone, Debug)]
pub struct Corpus {
    vocab: Vocabulary,
    batches: Array2<usize>,
    tokens: usize,
}

impl Corpus {
    pub(crate) fn new(
        vocab: Vocabulary,
        ids: Vec<usize>,
        batch_size: usize,
    ) -> Result<Self, CorpusError> {
        let tokens = ids.len();
        let batches = reshape(ids, batch_size)?;

        Ok(Self {
            vocab,
            batches,
            tokens,
        })
    }

    /// Gets the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Gets the batch matrix.
    pub fn batches(&self) -> ArrayView2<'_, usize> {
        self.batches.view()
    }

    pub fn batch_size(&self) -> usize {
        self.batches.nrows()
    }

    pub fn sequence_length(&self) -> usize {
        self.batches.ncols()
    }

    /// Gets the number of tokens before the truncation.
    pub fn tokens(&self) -> usize {
        self.tokens
    }

    /// Gets the number of trailing tokens which didn't fill a complete column.
    pub fn dropped(&self) -> usize {
        self.tokens - self.batches.len()
    }

    /// Maps the ids back to their words.
    ///
    /// # Errors
    /// Fails if an id is not part of the vocabulary.
    pub fn decode(&self, ids: impl IntoIterator<Item = usize>) -> Result<Vec<&str>, CorpusError> {
        ids.into_iter()
            .map(|id| {
                self.vocab
                    .word(id)
                    .ok_or_else(|| CorpusError::Lookup(id.to_string()))
            })
            .collect()
    }

    /// Iterates over the batch matrix in windows of at most `bptt` steps.
    ///
    /// Each window holds the inputs `[:, i..i + len]` and the targets `[:, i + 1..i + 1 + len]`
    /// with `len = min(bptt, sequence_length - 1 - i)`.
    ///
    /// # Errors
    /// Fails if `bptt` is zero.
    pub fn windows(&self, bptt: usize) -> Result<Windows<'_>, CorpusError> {
        Windows::new(self.batches.view(), bptt)
    }

    /// Splits the corpus into the vocabulary and the batch matrix.
    pub fn into_parts(self) -> (Vocabulary, Array2<usize>) {
        (self.vocab, self.batches)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::arr2;

    use super::*;

    fn corpus(batch_size: usize) -> Corpus {
        let mut vocab = Vocabulary::new();
        vocab.extend(["the", "cat", "sat", "<eos>", "dog", "ran"].iter().copied());
        Corpus::new(vocab, vec![0, 1, 2, 3, 0, 4, 5, 3], batch_size).unwrap()
    }

    #[test]
    fn test_shape() {
        let corpus = corpus(3);
        assert_eq!(corpus.batch_size(), 3);
        assert_eq!(corpus.sequence_length(), 2);
        assert_eq!(corpus.tokens(), 8);
        assert_eq!(corpus.dropped(), 2);
        assert_eq!(corpus.batches(), arr2(&[[0, 1], [2, 3], [0, 4]]));
    }

    #[test]
    fn test_decode() {
        let corpus = corpus(2);
        let row = corpus.batches().row(1).to_vec();
        assert_eq!(corpus.decode(row).unwrap(), ["the", "dog", "ran", "<eos>"]);
        assert!(matches!(
            corpus.decode(vec![0, 6]).unwrap_err(),
            CorpusError::Lookup(id) if id == "6",
        ));
    }

    #[test]
    fn test_windows() {
        let corpus = corpus(2);
        let windows = corpus.windows(2).unwrap().collect::<Vec<_>>();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].inputs, arr2(&[[0, 1], [0, 4]]));
        assert_eq!(windows[0].targets, arr2(&[[1, 2], [4, 5]]));
        assert_eq!(windows[1].inputs, arr2(&[[2], [5]]));
        assert_eq!(windows[1].targets, arr2(&[[3], [3]]));
        assert!(corpus.windows(0).is_err());
    }

    #[test]
    fn test_into_parts() {
        let (vocab, batches) = corpus(2).into_parts();
        assert_eq!(vocab.len(), 6);
        assert_eq!(batches, arr2(&[[0, 1, 2, 3], [0, 4, 5, 3]]));
    }
}
