//! Line-oriented result output.
//!
//! One tab-separated line per (benchmark, size) pair, preceded by a single
//! `#`-prefixed header line, written to the supplied stream. Durations are
//! reported in integer nanoseconds and throughput in MiB/s.

use crate::stats::ResultRow;
use std::io::{self, Write};

/// Formats byte count in human-readable form (e.g., "1.5 GB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

fn mib_per_sec(bytes_per_sec: f64) -> f64 {
    bytes_per_sec / (1024.0 * 1024.0)
}

pub struct Reporter<W: Write> {
    out: W,
    wrote_header: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            wrote_header: false,
        }
    }

    /// Writes one result line, emitting the header before the first row.
    pub fn emit(&mut self, row: &ResultRow) -> io::Result<()> {
        if !self.wrote_header {
            writeln!(
                self.out,
                "#benchmark\tbytes\tsamples\tmin_ns\tmedian_ns\tstddev_ns\tmib_per_s"
            )?;
            self.wrote_header = true;
        }
        writeln!(
            self.out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.2}",
            row.benchmark,
            row.size,
            row.summary.count,
            row.summary.min.as_nanos(),
            row.summary.median.as_nanos(),
            row.summary.stddev.as_nanos(),
            mib_per_sec(row.throughput),
        )
    }

    pub fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Consumes the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{summarize, ResultRow};
    use anyhow::Result;
    use std::time::Duration;

    fn sample_row(size: usize) -> ResultRow {
        let samples = vec![Duration::from_micros(100); 7];
        ResultRow::new("md5", size, summarize(&samples))
    }

    #[test]
    fn test_one_line_per_row_plus_header() -> Result<()> {
        let mut reporter = Reporter::new(Vec::new());
        reporter.emit(&sample_row(1024))?;
        reporter.emit(&sample_row(65536))?;
        reporter.finish()?;

        let output = String::from_utf8(reporter.out)?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('#'));
        assert!(lines[1].starts_with("md5\t1024\t"));
        assert!(lines[2].starts_with("md5\t65536\t"));
        Ok(())
    }

    #[test]
    fn test_rows_are_parseable() -> Result<()> {
        let mut reporter = Reporter::new(Vec::new());
        reporter.emit(&sample_row(1024))?;

        let output = String::from_utf8(reporter.out)?;
        let row = output.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split('\t').collect();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[0], "md5");
        assert_eq!(fields[1].parse::<usize>()?, 1024);
        assert_eq!(fields[2].parse::<usize>()?, 7);
        // 1 KiB in 100 us is 9.77 MiB/s.
        assert_eq!(fields[4].parse::<u64>()?, 100_000);
        assert!((fields[6].parse::<f64>()? - 9.77).abs() < 0.01);
        Ok(())
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(64), "64 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(16 * 1024 * 1024), "16.00 MB");
    }
}
