/// One successfully parsed access log line.
///
/// All fields except `request_time` are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub remote_addr: String,
    pub remote_user: String,
    pub real_ip: String,
    pub time_local: String,
    /// Raw request line, e.g. `GET /api/v2/banner/1 HTTP/1.1`
    pub request: String,
    pub status: String,
    pub body_bytes_sent: String,
    pub referer: String,
    pub user_agent: String,
    pub forwarded_for: String,
    pub request_id: String,
    pub rb_user: String,
    /// Seconds, finite and non-negative.
    pub request_time: f64,
}

impl LogRecord {
    /// The aggregation key: second whitespace-delimited token of the request line.
    ///
    /// `None` when the request line has fewer than two tokens.
    pub fn endpoint(&self) -> Option<&str> {
        self.request.split_whitespace().nth(1)
    }
}
