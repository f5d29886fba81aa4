//! Reading charge text from a file.

use crate::error::{Result, SummationError};
use crate::format::CurrencyFormat;
use crate::report::ChargeLineResults;
use crate::summation::ChargeSummation;
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Reads a file and sums the currency amounts in it.
///
/// At most `buffer_size` bytes are read; by default the whole file. Bytes that
/// are not valid UTF-8 are replaced with U+FFFD, so they surface as fragment
/// failures rather than I/O errors.
#[derive(Debug, Clone)]
pub struct ChargeLineReader {
    path: PathBuf,
    buffer_size: Option<usize>,
    format: CurrencyFormat,
}

impl ChargeLineReader {
    /// Creates a reader for `path` that reads the whole file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ChargeLineReader {
            path: path.into(),
            buffer_size: None,
            format: CurrencyFormat::default(),
        }
    }

    /// Limits how many bytes are read.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = Some(buffer_size);
        self
    }

    /// Uses `format` instead of US dollars.
    pub fn with_format(mut self, format: CurrencyFormat) -> Self {
        self.format = format;
        self
    }

    /// The file this reader sums.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file and parses its contents with a fresh summation.
    pub fn sum(&self) -> Result<ChargeLineResults> {
        let mut summation =
            ChargeSummation::with_format(self.format.clone(), ChargeSummation::INITIAL_SUM)?;

        let file = File::open(&self.path).map_err(|e| self.read_error(e))?;
        let limit = match self.buffer_size {
            Some(size) => size as u64,
            None => file.metadata().map_err(|e| self.read_error(e))?.len(),
        };

        let mut buffer = Vec::new();
        let bytes_read = file
            .take(limit)
            .read_to_end(&mut buffer)
            .map_err(|e| self.read_error(e))?;
        debug!("Read {} bytes from {}", bytes_read, self.path.display());

        summation.parse(&String::from_utf8_lossy(&buffer));

        Ok(ChargeLineResults {
            bytes_read,
            summation,
        })
    }

    fn read_error(&self, source: io::Error) -> SummationError {
        if source.kind() == io::ErrorKind::NotFound {
            SummationError::FileNotFound {
                path: self.path.clone(),
            }
        } else {
            SummationError::ReadFailed {
                path: self.path.clone(),
                source,
            }
        }
    }
}
