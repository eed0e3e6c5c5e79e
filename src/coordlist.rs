//! Coordinate-list text format reader/writer
//!
//! The format is line-oriented:
//!
//! ```text
//! rows=<R>
//! cols=<C>
//! (row, col, value)
//! ...
//! ```
//!
//! The two header lines are mandatory and come first. Every remaining
//! non-blank line must be a parenthesized record whose coordinates are
//! unsigned decimal integers and whose value is a decimal integer with at
//! most one leading `-`. Whitespace is allowed after each comma and around
//! the whole line, nowhere else. Blank lines between records are skipped.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::matrix::SparseMatrixDOK;

/// Coordinate-list format reader/writer
pub struct CoordListIO;

impl CoordListIO {
    /// Read a matrix from a coordinate-list file
    ///
    /// The whole file is read in one go; there is no streaming.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Format`]
    /// if its contents violate the grammar.
    pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrixDOK<i64>> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading matrix from file");
        let text = fs::read_to_string(path)?;
        Self::parse_str(&text)
    }

    /// Parse a matrix from coordinate-list text
    ///
    /// The input is trimmed as a whole before splitting into lines, so blank
    /// lines before the header or after the last record never count. The
    /// first two surviving lines must be the `rows=`/`cols=` headers; a
    /// blank line in a header position is a malformed header.
    ///
    /// Records are applied through the element setter: zero-valued records
    /// are dropped and a duplicate coordinate takes the last value. A record
    /// whose coordinate falls outside the declared shape fails the parse,
    /// keeping every stored key inside `n_rows × n_cols`.
    ///
    /// Parsing is all-or-nothing: the first offending line aborts the load
    /// and no matrix is returned.
    pub fn parse_str(text: &str) -> Result<SparseMatrixDOK<i64>> {
        let mut lines = text.trim().split('\n');

        let n_rows = parse_header(lines.next(), 1, "rows")?;
        let n_cols = parse_header(lines.next(), 2, "cols")?;
        tracing::debug!(n_rows, n_cols, "parsed matrix dimensions");

        let mut matrix = SparseMatrixDOK::new(n_rows, n_cols);
        for (idx, raw) in lines.enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            // 1-based position counting the two header lines
            let line_no = idx + 3;
            let (row, col, value) = parse_record(line, line_no)?;
            if row >= n_rows || col >= n_cols {
                return Err(Error::format(
                    line_no,
                    format!(
                        "coordinate ({}, {}) outside declared shape {}x{}",
                        row, col, n_rows, n_cols
                    ),
                ));
            }

            tracing::trace!(row, col, value, "setting element");
            matrix.set(row, col, value);
        }

        Ok(matrix)
    }

    /// Write a matrix to a coordinate-list file
    ///
    /// Records are sorted by `(row, col)` so the output is deterministic,
    /// with one space after each comma. The result parses back to an equal
    /// matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrixDOK<i64>) -> Result<()> {
        let mut file = File::create(path)?;

        writeln!(file, "rows={}", matrix.n_rows)?;
        writeln!(file, "cols={}", matrix.n_cols)?;

        let mut records: Vec<((usize, usize), i64)> =
            matrix.iter().map(|(coord, &value)| (coord, value)).collect();
        records.sort_unstable_by_key(|&(coord, _)| coord);

        for ((row, col), value) in records {
            writeln!(file, "({}, {}, {})", row, col, value)?;
        }

        Ok(())
    }
}

/// Parse a `key=<integer>` header line
fn parse_header(line: Option<&str>, line_no: usize, key: &str) -> Result<usize> {
    let line = line.map(str::trim).unwrap_or("");

    let value = match line.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')) {
        Some(value) => value,
        None => {
            return Err(Error::format(
                line_no,
                format!("expected `{}=<integer>` header", key),
            ))
        }
    };

    parse_unsigned(value).ok_or_else(|| {
        Error::format(
            line_no,
            format!("`{}` is not a non-negative integer", value),
        )
    })
}

/// Parse a `(row, col, value)` record
fn parse_record(line: &str, line_no: usize) -> Result<(usize, usize, i64)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            Error::format(line_no, "record must be parenthesized `(row, col, value)`")
        })?;

    let fields: Vec<&str> = inner.split(',').collect();
    if fields.len() != 3 {
        return Err(Error::format(
            line_no,
            format!("expected 3 comma-separated fields, found {}", fields.len()),
        ));
    }

    // Whitespace is legal after a comma only, so the row field must already
    // be bare digits while col/value may carry leading whitespace
    let row = parse_unsigned(fields[0]).ok_or_else(|| {
        Error::format(
            line_no,
            format!("row index `{}` is not an unsigned integer", fields[0]),
        )
    })?;
    let col = parse_unsigned(fields[1].trim_start()).ok_or_else(|| {
        Error::format(
            line_no,
            format!("column index `{}` is not an unsigned integer", fields[1]),
        )
    })?;
    let value = parse_value(fields[2].trim_start()).ok_or_else(|| {
        Error::format(
            line_no,
            format!("value `{}` is not an integer", fields[2]),
        )
    })?;

    Ok((row, col, value))
}

/// Parse a bare unsigned decimal integer: digits only, no sign, no padding
fn parse_unsigned(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse a signed decimal integer: at most one leading `-`, then digits only
fn parse_value(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
