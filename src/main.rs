//! Charge Summation CLI
//!
//! Reads a text file of currency amounts and prints their sum along with the
//! locations of any amounts that failed to parse.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- charges.txt
//! cargo run -- charges.txt --csv --buffer-size 4096 --strict
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use charge_summation::{ChargeLineReader, CurrencyFormat, Result, TrailingText};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

/// Sum the currency amounts in a text file
#[derive(Parser, Debug)]
#[command(name = "charge-summation", version)]
struct Options {
    /// Text file containing currency amounts
    input: PathBuf,

    /// Write a single CSV record instead of the text summary
    #[arg(long)]
    csv: bool,

    /// Read at most this many bytes of the file
    #[arg(long, value_name = "BYTES")]
    buffer_size: Option<usize>,

    /// Fail amounts followed by anything other than whitespace
    #[arg(long)]
    strict: bool,
}

fn main() {
    env_logger::init();

    let options = Options::parse();
    if let Err(e) = run(options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(options: Options) -> Result<()> {
    let mut reader = ChargeLineReader::new(options.input);
    if let Some(size) = options.buffer_size {
        reader = reader.with_buffer_size(size);
    }
    if options.strict {
        reader = reader.with_format(CurrencyFormat::default().trailing(TrailingText::Reject));
    }
    let results = reader.sum()?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    if options.csv {
        results.write_csv(handle)?;
    } else {
        results.write_summary(handle)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_only() {
        let options = Options::try_parse_from(["charge-summation", "charges.txt"]).unwrap();
        assert_eq!(options.input, PathBuf::from("charges.txt"));
        assert!(!options.csv);
        assert!(!options.strict);
        assert_eq!(options.buffer_size, None);
    }

    #[test]
    fn test_all_options() {
        let options = Options::try_parse_from([
            "charge-summation",
            "--csv",
            "charges.txt",
            "--buffer-size",
            "64",
            "--strict",
        ])
        .unwrap();
        assert!(options.csv);
        assert!(options.strict);
        assert_eq!(options.buffer_size, Some(64));
        assert_eq!(options.input, PathBuf::from("charges.txt"));
    }

    #[test]
    fn test_missing_input() {
        assert!(Options::try_parse_from(["charge-summation", "--csv"]).is_err());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Options::try_parse_from(["charge-summation", "a.txt", "--buffer-size"]).is_err());
        assert!(
            Options::try_parse_from(["charge-summation", "a.txt", "--buffer-size", "lots"])
                .is_err()
        );
        assert!(Options::try_parse_from(["charge-summation", "a.txt", "--verbose"]).is_err());
        assert!(Options::try_parse_from(["charge-summation", "a.txt", "b.txt"]).is_err());
    }
}
