//! Summation results and their rendering.

use crate::error::Result;
use crate::summation::ChargeSummation;
use serde::Serialize;
use std::io::Write;

/// What reading a file produced: how many bytes were read and the summation over them.
#[derive(Debug, Clone)]
pub struct ChargeLineResults {
    /// Number of bytes read from the file.
    pub bytes_read: usize,

    /// Summation after parsing the decoded bytes.
    pub summation: ChargeSummation,
}

/// Single CSV record for machine-readable output.
#[derive(Debug, Serialize)]
struct SummaryRecord {
    bytes_read: usize,
    sum: String,
    errors: String,
}

impl ChargeLineResults {
    /// Writes the human-readable summary followed by any error locations.
    pub fn write_summary<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "The size of the file is {}; the summation is {}{:.2}.",
            self.bytes_read,
            self.summation.symbol(),
            self.summation.sum()
        )?;

        let errors = self.summation.errors();
        if errors.is_empty() {
            writeln!(writer, "No parse errors occurred.")?;
        } else {
            writeln!(writer, "Parse errors occurred at the following locations - ")?;
            for location in errors {
                writeln!(writer, "Location: {}", location)?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    /// Writes a `bytes_read,sum,errors` CSV with one record.
    ///
    /// Error positions are joined with `;`.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let errors: Vec<String> = self
            .summation
            .errors()
            .iter()
            .map(|p| p.to_string())
            .collect();

        csv_writer.serialize(SummaryRecord {
            bytes_read: self.bytes_read,
            sum: format!("{:.2}", self.summation.sum()),
            errors: errors.join(";"),
        })?;

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results_for(text: &str) -> ChargeLineResults {
        let mut summation = ChargeSummation::new();
        summation.parse(text);
        ChargeLineResults {
            bytes_read: text.len(),
            summation,
        }
    }

    #[test]
    fn test_summary_without_errors() {
        let results = results_for("$1.00$2.50");
        let mut output = Vec::new();
        results.write_summary(&mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "The size of the file is 10; the summation is $3.50.\nNo parse errors occurred.\n"
        );
    }

    #[test]
    fn test_summary_with_errors() {
        let results = results_for("$1.00$abc$3.00$?");
        let mut output = Vec::new();
        results.write_summary(&mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("the summation is $4.00."));
        assert!(output.contains("Parse errors occurred at the following locations - \n"));
        assert!(output.contains("Location: 2\nLocation: 4\n"));
    }

    #[test]
    fn test_csv_output() {
        let results = results_for("$1.00$abc$3.00$?");
        let mut output = Vec::new();
        results.write_csv(&mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "bytes_read,sum,errors\n16,4.00,2;4\n");
    }

    #[test]
    fn test_csv_output_without_errors() {
        let results = results_for("$5");
        let mut output = Vec::new();
        results.write_csv(&mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "bytes_read,sum,errors\n2,5.00,\n");
    }
}
