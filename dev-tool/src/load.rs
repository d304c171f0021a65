use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use corpus::{Builder, Corpus, CorpusError, ErrorKind};
use log::debug;
use structopt::StructOpt;

use crate::utils::spin_while_loading;

/// Options for loading a corpus.
#[derive(StructOpt, Debug)]
pub(crate) struct LoadArgs {
    /// The number of rows of the batch matrix.
    #[structopt(short, long, default_value = "20")]
    batch_size: usize,

    /// The token appended to every line.
    #[structopt(long, default_value = "<eos>")]
    eos: String,

    /// The text file with one sentence per line.
    file: PathBuf,
}

impl LoadArgs {
    pub(crate) fn load(&self) -> Result<Corpus, Error> {
        debug!(
            "Loading {} with batch size {}.",
            self.file.display(),
            self.batch_size,
        );
        let builder = Builder::default()
            .with_batch_size(self.batch_size)?
            .with_eos_token(self.eos.as_str());
        let corpus = spin_while_loading(&self.file, || builder.load(&self.file))
            .with_context(|| format!("Loading {} failed.", self.file.display()))?;
        debug!(
            "Loaded {} tokens with {} distinct words.",
            corpus.tokens(),
            corpus.vocab().len(),
        );

        Ok(corpus)
    }

    pub(crate) fn file(&self) -> &Path {
        &self.file
    }
}

/// Checks if the error can be fixed by retrying with different arguments.
pub(crate) fn is_invalid_argument(error: &Error) -> bool {
    error
        .downcast_ref::<CorpusError>()
        .map_or(false, |error| error.kind() == ErrorKind::InvalidArgument)
}
