use serde::Serialize;

/// Timing statistics for one endpoint, ready for the HTML table.
///
/// Field names are the contract with the report template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub url: Option<String>,
    pub count: u64,
    pub count_perc: String,
    pub time_sum: f64,
    pub time_perc: String,
    pub time_avg: String,
    pub time_max: String,
    pub time_med: String,
}
