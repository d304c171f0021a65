use std::{
    fs::File,
    io::{BufRead, BufReader, Result as IoResult},
    path::Path,
};

use crate::{
    corpus::Corpus,
    tokenizer::{lines, tokenize},
    vocab::Vocabulary,
    CorpusError,
};

/// A builder to load a [`Corpus`].
#[derive(Clone, Debug)]
pub struct Builder {
    batch_size: usize,
    eos: String,
}

impl Default for Builder {
    /// Creates a [`Corpus`] builder.
    ///
    /// The default settings are a batch size of `20` and the `"<eos>"` end-of-sequence token.
    fn default() -> Self {
        Self {
            batch_size: 20,
            eos: "<eos>".into(),
        }
    }
}

impl Builder {
    /// Sets the number of rows of the batch matrix.
    ///
    /// Defaults to `20`.
    ///
    /// # Errors
    /// Fails if `size` is zero.
    pub fn with_batch_size(mut self, size: usize) -> Result<Self, CorpusError> {
        if size > 0 {
            self.batch_size = size;
            Ok(self)
        } else {
            Err(CorpusError::BatchSize)
        }
    }

    /// Sets the token which is appended to every line.
    ///
    /// Defaults to `"<eos>"`.
    pub fn with_eos_token(mut self, eos: impl Into<String>) -> Self {
        self.eos = eos.into();
        self
    }

    /// Loads a [`Corpus`] from a text file.
    ///
    /// Lines end in `\n`, `\r\n` or a lone `\r`. Tokens are separated by runs of whitespace or
    /// of the ascii separators `\x1c` to `\x1f`.
    ///
    /// The file is read twice, once to build the vocabulary and once to encode the tokens. Each
    /// file handle is closed before the next step.
    ///
    /// # Errors
    /// Fails if the file can't be read, if it has fewer tokens than the batch size or if it
    /// changed between both reads.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Corpus, CorpusError> {
        let path = path.as_ref();
        let (vocab, tokens) = self.build_vocab(lines(BufReader::new(File::open(path)?)))?;
        let ids = self.encode(lines(BufReader::new(File::open(path)?)), &vocab, tokens)?;
        Corpus::new(vocab, ids, self.batch_size)
    }

    /// Loads a [`Corpus`] from an in-memory text.
    ///
    /// The reader is consumed once and its lines are buffered for the encoding.
    ///
    /// # Errors
    /// Fails if the reader fails or if it has fewer tokens than the batch size.
    pub fn load_from_reader(&self, reader: impl BufRead) -> Result<Corpus, CorpusError> {
        let lines = lines(reader).collect::<IoResult<Vec<_>>>()?;
        let (vocab, tokens) = self.build_vocab(lines.iter().map(Ok))?;
        let ids = self.encode(lines.iter().map(Ok), &vocab, tokens)?;
        Corpus::new(vocab, ids, self.batch_size)
    }

    /// Builds the vocabulary and counts the tokens.
    fn build_vocab<S>(
        &self,
        lines: impl Iterator<Item = IoResult<S>>,
    ) -> Result<(Vocabulary, usize), CorpusError>
    where
        S: AsRef<str>,
    {
        let mut vocab = Vocabulary::new();
        let mut tokens = 0;
        for line in lines {
            for token in tokenize(line?.as_ref(), &self.eos) {
                vocab.add_word(token);
                tokens += 1;
            }
        }

        Ok((vocab, tokens))
    }

    /// Encodes the tokens with a complete vocabulary.
    fn encode<S>(
        &self,
        lines: impl Iterator<Item = IoResult<S>>,
        vocab: &Vocabulary,
        tokens: usize,
    ) -> Result<Vec<usize>, CorpusError>
    where
        S: AsRef<str>,
    {
        let mut ids = Vec::with_capacity(tokens);
        for line in lines {
            for token in tokenize(line?.as_ref(), &self.eos) {
                let id = vocab
                    .index(token)
                    .ok_or_else(|| CorpusError::Lookup(token.to_string()))?;
                ids.push(id);
            }
        }

        if ids.len() == tokens {
            Ok(ids)
        } else {
            Err(CorpusError::TokenCount {
                expected: tokens,
                actual: ids.len(),
            })
        }
    }
}

/// Loads a [`Corpus`] from a text file with the default end-of-sequence token.
///
/// # Errors
/// Fails if the batch size is zero or if [`Builder::load()`] fails.
pub fn get_data(path: impl AsRef<Path>, batch_size: usize) -> Result<Corpus, CorpusError> {
    Builder::default().with_batch_size(batch_size)?.load(path)
}
