//! Rendering a series for a caller. Formatters never change the data.

use std::fmt;
use std::io::{self, Write};

use chrono::Timelike;

use crate::series::InterestSeries;

const DATE_HEADER: &str = "date";
const PARTIAL_HEADER: &str = "isPartial";

/// Renders an [`InterestSeries`] to an output channel.
pub trait SeriesFormatter {
    /// Writes the whole series, header included.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from `out`.
    fn write_series(&self, series: &InterestSeries, out: &mut dyn Write) -> io::Result<()>;
}

/// Column-aligned, human-readable dump: `date`, one column per keyword, `isPartial`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableFormatter;

/// Comma-separated values with the same columns as [`TableFormatter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

/// Writes `series` to `out` with `formatter`.
///
/// # Errors
///
/// Propagates I/O errors from `out`.
pub fn emit<F, W>(series: &InterestSeries, formatter: &F, out: &mut W) -> io::Result<()>
where
    F: SeriesFormatter + ?Sized,
    W: Write,
{
    formatter.write_series(series, &mut *out)?;
    out.flush()
}

impl SeriesFormatter for TableFormatter {
    fn write_series(&self, series: &InterestSeries, out: &mut dyn Write) -> io::Result<()> {
        let rows = cells(series, |p| if p { "True" } else { "False" });
        let mut header = vec![DATE_HEADER.to_string()];
        header.extend(series.keywords().iter().cloned());
        header.push(PARTIAL_HEADER.to_string());

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                rows.iter()
                    .map(|r| r[col].chars().count())
                    .chain(std::iter::once(header[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write_aligned(out, &header, &widths)?;
        for row in &rows {
            write_aligned(out, row, &widths)?;
        }
        Ok(())
    }
}

impl SeriesFormatter for CsvFormatter {
    fn write_series(&self, series: &InterestSeries, out: &mut dyn Write) -> io::Result<()> {
        let mut header = vec![DATE_HEADER.to_string()];
        header.extend(series.keywords().iter().cloned());
        header.push(PARTIAL_HEADER.to_string());
        writeln!(out, "{}", csv_line(&header))?;

        for row in cells(series, |p| if p { "true" } else { "false" }) {
            writeln!(out, "{}", csv_line(&row))?;
        }
        Ok(())
    }
}

impl fmt::Display for InterestSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        TableFormatter
            .write_series(self, &mut buf)
            .map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

/// One string row per point: date, values, partial flag.
fn cells(series: &InterestSeries, flag: fn(bool) -> &'static str) -> Vec<Vec<String>> {
    let with_time = series
        .points()
        .iter()
        .any(|p| p.time.num_seconds_from_midnight() != 0);
    let date_fmt = if with_time {
        "%Y-%m-%d %H:%M:%S"
    } else {
        "%Y-%m-%d"
    };

    series
        .points()
        .iter()
        .map(|p| {
            let mut row = Vec::with_capacity(p.values.len() + 2);
            row.push(p.time.format(date_fmt).to_string());
            row.extend(p.values.iter().map(u8::to_string));
            row.push(flag(p.is_partial).to_string());
            row
        })
        .collect()
}

/// Date column left-aligned, everything else right-aligned.
fn write_aligned(out: &mut dyn Write, row: &[String], widths: &[usize]) -> io::Result<()> {
    let mut line = String::new();
    for (i, (cell, w)) in row.iter().zip(widths.iter().copied()).enumerate() {
        if i == 0 {
            line.push_str(&format!("{cell:<w$}"));
        } else {
            line.push_str(&format!("  {cell:>w$}"));
        }
    }
    writeln!(out, "{}", line.trim_end())
}

fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| {
            if f.contains([',', '"', '\n']) {
                format!("\"{}\"", f.replace('"', "\"\""))
            } else {
                f.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
