use crate::decode::LogRecord;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// nginx `ui_short` log format:
///
/// ```text
/// log_format ui_short '$remote_addr  $remote_user $http_x_real_ip [$time_local] "$request" '
///                     '$status $body_bytes_sent "$http_referer" '
///                     '"$http_user_agent" "$http_x_forwarded_for" "$http_X_REQUEST_ID" "$http_X_RB_USER" '
///                     '$request_time';
/// ```
pub const UI_SHORT_PATTERN: &str = concat!(
    r#"^(?P<remote_addr>\S+)\s+"#,
    r#"(?P<remote_user>\S+)\s+"#,
    r#"(?P<http_x_real_ip>\S+)\s+"#,
    r#"\[(?P<time_local>[^\]]+)\]\s+"#,
    r#""(?P<request>[^"]+)"\s+"#,
    r#"(?P<status>\d+)\s+"#,
    r#"(?P<body_bytes_sent>\d+)\s+"#,
    r#""(?P<http_referer>[^"]+)"\s+"#,
    r#""(?P<http_user_agent>[^"]+)"\s+"#,
    r#""(?P<http_x_forwarded_for>[^"]+)"\s+"#,
    r#""(?P<http_x_request_id>[^"]+)"\s+"#,
    r#""(?P<http_rb_user>[^"]+)"\s+"#,
    r#"(?P<request_time>\S+)\s*$"#,
);

/// Named groups every line pattern has to capture.
pub const REQUIRED_GROUPS: [&str; 13] = [
    "remote_addr",
    "remote_user",
    "http_x_real_ip",
    "time_local",
    "request",
    "status",
    "body_bytes_sent",
    "http_referer",
    "http_user_agent",
    "http_x_forwarded_for",
    "http_x_request_id",
    "http_rb_user",
    "request_time",
];

static UI_SHORT: Lazy<LinePattern> = Lazy::new(|| {
    LinePattern::new(UI_SHORT_PATTERN).expect("built-in ui_short pattern must compile")
});

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid line pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("line pattern is missing named group '{0}'")]
    MissingGroup(&'static str),
}

/// Why a single line was rejected. Never leaves the decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum LineRejection {
    InvalidUtf8,
    NoMatch,
    BadRequestTime(String),
}

/// Compiled structural pattern for one access log line.
#[derive(Debug, Clone)]
pub struct LinePattern {
    regex: Regex,
}

impl LinePattern {
    pub fn new(expr: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(expr)?;

        let names: Vec<&str> = regex.capture_names().flatten().collect();
        if let Some(missing) = REQUIRED_GROUPS.iter().find(|g| !names.contains(g)) {
            return Err(PatternError::MissingGroup(missing));
        }

        Ok(Self { regex })
    }

    /// The built-in nginx `ui_short` layout.
    pub fn ui_short() -> &'static LinePattern {
        &UI_SHORT
    }

    pub fn parse(&self, line: &str) -> Result<LogRecord, LineRejection> {
        let caps = self.regex.captures(line).ok_or(LineRejection::NoMatch)?;

        let raw_time = field(&caps, "request_time");
        let request_time = parse_request_time(raw_time)
            .ok_or_else(|| LineRejection::BadRequestTime(raw_time.to_string()))?;

        Ok(LogRecord {
            remote_addr: field(&caps, "remote_addr").to_string(),
            remote_user: field(&caps, "remote_user").to_string(),
            real_ip: field(&caps, "http_x_real_ip").to_string(),
            time_local: field(&caps, "time_local").to_string(),
            request: field(&caps, "request").to_string(),
            status: field(&caps, "status").to_string(),
            body_bytes_sent: field(&caps, "body_bytes_sent").to_string(),
            referer: field(&caps, "http_referer").to_string(),
            user_agent: field(&caps, "http_user_agent").to_string(),
            forwarded_for: field(&caps, "http_x_forwarded_for").to_string(),
            request_id: field(&caps, "http_x_request_id").to_string(),
            rb_user: field(&caps, "http_rb_user").to_string(),
            request_time,
        })
    }
}

impl Default for LinePattern {
    fn default() -> Self {
        Self::ui_short().clone()
    }
}

fn field<'l>(caps: &Captures<'l>, name: &str) -> &'l str {
    caps.name(name).map(|m| m.as_str()).unwrap_or_default()
}

fn parse_request_time(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t >= 0.0)
}
