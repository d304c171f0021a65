use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Error};
use corpus::Corpus;
use log::info;
use serde::Serialize;
use structopt::StructOpt;

use crate::{exit_code::NO_ERROR, load::LoadArgs};

/// Encodes a corpus and writes the vocabulary and batch matrix as json.
#[derive(StructOpt, Debug)]
pub struct EncodeCmd {
    #[structopt(flatten)]
    load: LoadArgs,

    /// Json file to write the encoded corpus to, defaults to stdout.
    #[structopt(short, long)]
    out: Option<PathBuf>,

    /// Pretty prints the json.
    #[structopt(long)]
    pretty: bool,
}

/// The json representation of an encoded corpus.
#[derive(Debug, PartialEq, Serialize)]
struct EncodedCorpus<'a> {
    /// The words in index order.
    vocab: Vec<&'a str>,
    /// The rows of the batch matrix.
    batches: Vec<Vec<usize>>,
    tokens: usize,
    dropped: usize,
}

impl<'a> From<&'a Corpus> for EncodedCorpus<'a> {
    fn from(corpus: &'a Corpus) -> Self {
        Self {
            vocab: corpus.vocab().iter().map(|(_, word)| word).collect(),
            batches: corpus
                .batches()
                .outer_iter()
                .map(|row| row.to_vec())
                .collect(),
            tokens: corpus.tokens(),
            dropped: corpus.dropped(),
        }
    }
}

impl EncodeCmd {
    pub fn run(self) -> Result<i32, Error> {
        let corpus = self.load.load()?;
        let encoded = EncodedCorpus::from(&corpus);

        if let Some(out) = &self.out {
            let writer = BufWriter::new(
                File::create(out)
                    .with_context(|| format!("Creating {} failed.", out.display()))?,
            );
            self.write(writer, &encoded)?;
            info!("Wrote encoded corpus to {}.", out.display());
        } else {
            self.write(io::stdout().lock(), &encoded)?;
        }

        Ok(NO_ERROR)
    }

    fn write(&self, mut writer: impl Write, encoded: &EncodedCorpus) -> Result<(), Error> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, encoded)?;
        } else {
            serde_json::to_writer(&mut writer, encoded)?;
        }
        writeln!(writer)?;
        writer.flush().map_err(Into::into)
    }
}
