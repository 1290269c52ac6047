use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::CryptoglotError;
use crate::storage::Language;
/// This doc string acts as a help message when the uses run '--help' in CLI mode
/// as do all doc strings on fields
use clap::Parser;
use log::trace;

/// Guesses the language of ciphertext and ranks Caesar, Vigenère, substitution
/// and Base64 decodings of it.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct Opts {
    /// The ciphertext. Can span several lines, each is analysed on its own.
    /// If neither --text nor --file is given, it is read from stdin.
    #[arg(short, long)]
    text: Option<String>,

    /// Opens a file for decoding
    /// Use instead of `--text`
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Skip language detection and treat every block as this language (en or it)
    #[arg(short, long)]
    language: Option<Language>,

    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Stop the exhaustive Vigenère key search after this many seconds
    #[arg(short = 'T', long)]
    timeout: Option<u32>,

    /// Print the results as JSON instead of the human readable report
    #[arg(short, long)]
    api_mode: bool,

    /// Read settings from a TOML file. Flags given on the command line win.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Parse CLI Arguments turns a Clap Opts struct, seen above
/// Into a library Struct for use within the program
/// The library struct can be found in the [config](../config) folder.
///
/// # Errors
/// Fails when both a file and text are given, when the file, stdin or the
/// config file cannot be read, or when the config file is invalid.
pub fn parse_cli_args() -> Result<(String, Config), CryptoglotError> {
    let opts: Opts = Opts::parse();
    let min_log_level = match opts.verbose {
        0 => "Warn",
        1 => "Info",
        2 => "Debug",
        _ => "Trace",
    };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, min_log_level),
    );

    trace!("Program was called with CLI 😉");
    let input_text = read_input(&opts)?;
    trace!("The inputted text is {}", &input_text);

    let config = cli_args_into_config_struct(&opts)?;
    Ok((input_text, config))
}

/// Picks the input from `--text`, `--file` or stdin, in that order.
fn read_input(opts: &Opts) -> Result<String, CryptoglotError> {
    match (&opts.text, &opts.file) {
        (Some(_), Some(_)) => Err(CryptoglotError::Config(
            "both --text and --file were provided, please use only one".to_string(),
        )),
        (Some(text), None) => Ok(text.clone()),
        (None, Some(path)) => read_and_parse_file(path),
        (None, None) => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

/// When the CLI is called with `-f` to open a file
/// this function opens it
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn read_and_parse_file(file_path: &PathBuf) -> Result<String, CryptoglotError> {
    let contents = fs::read_to_string(file_path)?;
    // A trailing newline is not part of the ciphertext
    Ok(contents.trim_end_matches(['\n', '\r']).to_owned())
}

/// Turns our CLI arguments into a config stuct
fn cli_args_into_config_struct(opts: &Opts) -> Result<Config, CryptoglotError> {
    let mut config = match &opts.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };

    config.verbose = config.verbose.max(opts.verbose);
    if opts.language.is_some() {
        config.language = opts.language;
    }
    if let Some(timeout) = opts.timeout {
        config.timeout = timeout;
    }
    config.api_mode |= opts.api_mode;

    Ok(config)
}
