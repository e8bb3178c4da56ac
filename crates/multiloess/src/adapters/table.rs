//! CSV boundary adapters.
//!
//! ## Purpose
//!
//! Shot-length data usually arrives as a wide-format CSV file with one column
//! per film, where shorter films leave trailing cells empty. This module reads
//! such a table, extracts one film's durations with missing cells dropped, and
//! writes an aggregated result back out in long form.
//!
//! ## Design notes
//!
//! * Missing cells: empty strings and the usual NA tokens are skipped; rows
//!   shorter than the header count as missing for the absent columns.
//! * Any other cell that does not parse as a number fails the load.
//! * Long-form output uses the columns `span,times,fit`.
//!
//! ## Non-goals
//!
//! * Type inference, quoting dialects, or files without a header row.

// External dependencies
use core::fmt::Display;
use core::str::FromStr;
use num_traits::Float;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

// Internal dependencies
use crate::evaluation::aggregate::AggregatedResult;
use crate::primitives::errors::{MultiLoessError, Result};

/// Cell contents treated as missing.
pub const NA_TOKENS: &[&str] = &["", "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "#N/A"];

/// Header row of the long-form export.
pub const LONG_FORM_HEADER: [&str; 3] = ["span", "times", "fit"];

// ============================================================================
// Wide Table
// ============================================================================

/// A wide-format table of shot durations, one column per film.
#[derive(Debug, Clone)]
pub struct WideTable {
    headers: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

impl WideTable {
    /// Read a table with a header row from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_owned).collect();
        let rows = rdr.records().collect::<core::result::Result<Vec<_>, _>>()?;

        Ok(Self { headers, rows })
    }

    /// Read a table from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Durations of one column in row order, with missing cells dropped.
    pub fn durations<T>(&self, column: &str) -> Result<Vec<T>>
    where
        T: Float + FromStr,
    {
        let col = self
            .headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| MultiLoessError::UnknownColumn(column.to_owned()))?;

        let mut values = Vec::with_capacity(self.rows.len());
        for (row, record) in self.rows.iter().enumerate() {
            let cell = record.get(col).unwrap_or("");
            if NA_TOKENS.contains(&cell) {
                continue;
            }
            let value = cell
                .parse::<T>()
                .map_err(|_| MultiLoessError::UnparsableValue {
                    column: column.to_owned(),
                    row: row + 1,
                    value: cell.to_owned(),
                })?;
            values.push(value);
        }

        debug!(
            column,
            kept = values.len(),
            dropped = self.rows.len() - values.len(),
            "loaded duration column"
        );

        Ok(values)
    }
}

// ============================================================================
// Long-Form Export
// ============================================================================

/// Write `result` as `span,times,fit` rows to `writer`.
pub fn write_long_form<T, W>(result: &AggregatedResult<T>, writer: W) -> Result<()>
where
    T: Float + Display,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(LONG_FORM_HEADER)?;
    for r in result.iter() {
        wtr.write_record([r.span.to_string(), r.time.to_string(), r.fitted.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `result` in long form to a file.
pub fn write_long_form_to_path<T, P>(result: &AggregatedResult<T>, path: P) -> Result<()>
where
    T: Float + Display,
    P: AsRef<Path>,
{
    let file = std::fs::File::create(path)?;
    write_long_form(result, std::io::BufWriter::new(file))
}
