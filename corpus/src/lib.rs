#![cfg_attr(doc, forbid(broken_intra_doc_links, private_intra_doc_links))]
//! A corpus loader which converts a text file into batches of token ids for language modelling.
//!
//! The loader reads a text file line by line and splits each line on whitespace runs. An
//! end-of-sequence token is appended to every line. The vocabulary assigns dense indices to the
//! tokens in the order in which they are first seen. The flat sequence of token ids is truncated
//! to a multiple of the batch size and reshaped row-major into a batch matrix.
//!
//! The loader is configurable by:
//! - The batch size, which is the number of rows of the batch matrix.
//! - The end-of-sequence token.
//!
//! ```no_run
//! use corpus::Builder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let corpus = Builder::default()
//!         .with_batch_size(20)?
//!         .with_eos_token("<eos>")
//!         .load("train.txt")?;
//!
//!     let embeddings = corpus.vocab().len();
//!     for window in corpus.windows(35)? {
//!         let (inputs, targets) = (window.inputs, window.targets);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod batch;
mod builder;
mod corpus;
mod error;
mod tokenizer;
mod vocab;

pub use crate::{
    batch::{Window, Windows},
    builder::{get_data, Builder},
    corpus::Corpus,
    error::{CorpusError, ErrorKind},
    vocab::Vocabulary,
};
