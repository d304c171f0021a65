use anyhow::Error;
use structopt::StructOpt;

use crate::{exit_code::NO_ERROR, load::LoadArgs};

/// Inspects a corpus (vocabulary size, tokens, batch shape).
#[derive(StructOpt, Debug)]
pub struct InspectCmd {
    #[structopt(flatten)]
    load: LoadArgs,

    /// Prints every word of the vocabulary with its index.
    #[structopt(long)]
    print_vocab: bool,

    /// Prints the first `n` rows of the batch matrix as words.
    #[structopt(long)]
    print_rows: Option<usize>,
}

impl InspectCmd {
    pub fn run(self) -> Result<i32, Error> {
        let corpus = self.load.load()?;

        println!("file: {}", self.load.file().display());
        println!("vocabulary: {}", corpus.vocab().len());
        println!("tokens: {}", corpus.tokens());
        println!("dropped: {}", corpus.dropped());
        println!(
            "batches: {} x {}",
            corpus.batch_size(),
            corpus.sequence_length(),
        );

        if self.print_vocab {
            for (index, word) in corpus.vocab().iter() {
                println!("{}\t{}", index, word);
            }
        }

        if let Some(rows) = self.print_rows {
            for row in corpus.batches().outer_iter().take(rows) {
                println!("{}", corpus.decode(row.iter().copied())?.join(" "));
            }
        }

        Ok(NO_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsString, path::PathBuf};

    use test_utils::corpus::small;

    use super::*;

    fn cmd(args: &[&str], file: PathBuf) -> InspectCmd {
        let args = ["inspect"]
            .iter()
            .chain(args)
            .map(OsString::from)
            .chain(Some(file.into_os_string()));
        InspectCmd::from_iter_safe(args).unwrap()
    }

    #[test]
    fn test_inspect() {
        let cmd = cmd(&["--batch-size", "2"], small().unwrap());
        assert!(!cmd.print_vocab);
        assert_eq!(cmd.print_rows, None);
        assert_eq!(cmd.run().unwrap(), NO_ERROR);
    }

    #[test]
    fn test_inspect_print_rows() {
        let cmd = cmd(
            &["--batch-size", "2", "--print-vocab", "--print-rows", "2"],
            small().unwrap(),
        );
        assert!(cmd.print_vocab);
        assert_eq!(cmd.print_rows, Some(2));
        assert_eq!(cmd.run().unwrap(), NO_ERROR);
    }

    #[test]
    fn test_inspect_too_few_tokens() {
        let error = cmd(&["--batch-size", "9", "--print-rows", "1"], small().unwrap())
            .run()
            .unwrap_err();
        assert!(crate::load::is_invalid_argument(&error));
    }
}
