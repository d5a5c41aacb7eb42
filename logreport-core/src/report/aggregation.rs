use crate::decode::LogRecord;
use crate::report::{ReportRow, fixed3, median, percent, round3};
use std::collections::HashMap;

/// Every `request_time` seen for one endpoint, in encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointAccumulator {
    pub url: Option<String>,
    pub times: Vec<f64>,
}

/// Single-pass per-endpoint accumulation.
///
/// Accumulators are created lazily on first encounter and kept in that
/// order, so equal `time_sum`s rank deterministically.
#[derive(Debug, Default)]
pub struct ReportAggregator {
    endpoints: Vec<EndpointAccumulator>,
    index: HashMap<Option<String>, usize>,
    total_count: u64,
    total_time: f64,
}

impl ReportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &LogRecord) {
        let key = record.endpoint().map(str::to_owned);

        let slot = match self.index.get(&key) {
            Some(slot) => *slot,
            None => {
                self.endpoints.push(EndpointAccumulator {
                    url: key.clone(),
                    times: Vec::new(),
                });
                self.index.insert(key, self.endpoints.len() - 1);
                self.endpoints.len() - 1
            }
        };

        self.endpoints[slot].times.push(record.request_time);
        self.total_count += 1;
        self.total_time += record.request_time;
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn endpoints(&self) -> &[EndpointAccumulator] {
        &self.endpoints
    }

    /// Derive one row per endpoint, slowest total first, at most `limit` rows.
    pub fn into_rows(self, limit: usize) -> Vec<ReportRow> {
        if self.total_count == 0 || limit == 0 {
            return Vec::new();
        }

        let total_count = self.total_count;
        let total_time = self.total_time;

        let mut rows: Vec<ReportRow> = self
            .endpoints
            .into_iter()
            .map(|acc| derive_row(acc, total_count, total_time))
            .collect();

        // Stable: ties keep first-encounter order.
        rows.sort_by(|a, b| b.time_sum.total_cmp(&a.time_sum));
        rows.truncate(limit);
        rows
    }
}

fn derive_row(acc: EndpointAccumulator, total_count: u64, total_time: f64) -> ReportRow {
    let count = acc.times.len() as u64;
    // time_perc and time_avg are derived from the rounded sum, matching the
    // reports this tool has always produced.
    let time_sum = round3(acc.times.iter().sum::<f64>());
    let time_max = acc.times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let time_med = median(&acc.times).unwrap_or_default();

    let time_perc = if total_time > 0.0 {
        time_sum / total_time
    } else {
        0.0
    };

    ReportRow {
        url: acc.url,
        count,
        count_perc: percent(count as f64 / total_count as f64),
        time_sum,
        time_perc: percent(time_perc),
        time_avg: fixed3(time_sum / count as f64),
        time_max: fixed3(time_max),
        time_med: fixed3(time_med),
    }
}

/// Consume `records` exactly once and return the top `limit` rows by `time_sum`.
pub fn create_report<I>(records: I, limit: usize) -> Vec<ReportRow>
where
    I: IntoIterator<Item = LogRecord>,
{
    let mut aggregator = ReportAggregator::new();
    for record in records {
        aggregator.push(&record);
    }

    tracing::debug!(
        records = aggregator.total_count(),
        endpoints = aggregator.endpoints().len(),
        "aggregation pass complete"
    );

    aggregator.into_rows(limit)
}
