use crate::report::percent;
use serde::Serialize;

/// Per-pass line accounting for one [`LogRecordReader`](crate::decode::LogRecordReader).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseQuality {
    pub lines_count: u64,
    pub parse_errors_count: u64,
    /// 1-based line numbers that failed to parse, in file order.
    pub parse_errors_lines: Vec<u64>,
}

impl ParseQuality {
    pub(crate) fn line_read(&mut self) -> u64 {
        self.lines_count += 1;
        self.lines_count
    }

    pub(crate) fn line_rejected(&mut self, line: u64) {
        self.parse_errors_count += 1;
        self.parse_errors_lines.push(line);
    }

    /// `parse_errors_count / lines_count`, or `None` before any line was read.
    pub fn ratio(&self) -> Option<f64> {
        (self.lines_count > 0).then(|| self.parse_errors_count as f64 / self.lines_count as f64)
    }

    pub fn exceeds(&self, threshold: f64) -> bool {
        self.ratio().is_some_and(|ratio| ratio >= threshold)
    }

    /// Emit the end-of-pass summary and, when the error ratio reaches
    /// `threshold`, the warning signal.
    pub(crate) fn report(&self, threshold: f64) {
        let Some(ratio) = self.ratio() else {
            tracing::info!(
                lines_count = 0u64,
                parse_errors_count = 0u64,
                "parsing lines:0, nothing to parse"
            );
            return;
        };

        let ratio_pct = percent(ratio);
        tracing::info!(
            lines_count = self.lines_count,
            parse_errors_count = self.parse_errors_count,
            ratio = %ratio_pct,
            "parsing lines:{}, parsing errors count:{} ({})",
            self.lines_count,
            self.parse_errors_count,
            ratio_pct
        );

        if !self.parse_errors_lines.is_empty() {
            tracing::debug!(lines = ?self.parse_errors_lines, "lines failed to parse");
        }

        if ratio >= threshold {
            let threshold_pct = format!("{:.1}%", threshold * 100.0);
            tracing::warn!(
                ratio = %ratio_pct,
                threshold = %threshold_pct,
                "parsing error ratio over threshold percent. Actual:{}, Expect: less {}",
                ratio_pct,
                threshold_pct
            );
        }
    }
}
