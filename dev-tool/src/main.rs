use std::process::exit;

use anyhow::Error;
use env_logger::Env;
use log::error;
use structopt::StructOpt;

use crate::{
    encode::EncodeCmd,
    exit_code::{FATAL_ERROR, NON_FATAL_ERROR},
    inspect::InspectCmd,
    load::is_invalid_argument,
};

mod encode;
mod exit_code;
mod inspect;
mod load;
mod utils;

/// Tooling for preparing language model corpora.
#[derive(StructOpt, Debug)]
enum CommandArgs {
    Inspect(InspectCmd),
    Encode(EncodeCmd),
}

impl CommandArgs {
    fn run(self) -> Result<i32, Error> {
        match self {
            CommandArgs::Inspect(cmd) => cmd.run(),
            CommandArgs::Encode(cmd) => cmd.run(),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let exit_code = match CommandArgs::from_args().run() {
        Ok(exit_code) => exit_code,
        Err(error) if is_invalid_argument(&error) => {
            error!("{:#}", error);
            NON_FATAL_ERROR
        }
        Err(error) => {
            eprintln!("{:?}", error);
            FATAL_ERROR
        }
    };

    exit(exit_code);
}
