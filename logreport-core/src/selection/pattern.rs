use chrono::NaiveDate;
use regex::Regex;

/// Named group holding the date part of a file name.
pub const FILE_DATE_GROUP: &str = "file_date";

pub const DEFAULT_LOG_FILENAME_TEMPLATE: &str =
    r"^nginx-access-ui\.log-(?P<file_date>[0-9]{8})\.(?:log|gz)$";
pub const DEFAULT_LOG_FILEDATE_FORMAT: &str = "%Y%m%d";

pub const DEFAULT_REPORT_FILENAME_TEMPLATE: &str =
    r"^report-(?P<file_date>[0-9]{4}\.[0-9]{2}\.[0-9]{2})\.html$";
pub const DEFAULT_REPORT_FILEDATE_FORMAT: &str = "%Y.%m.%d";
pub const DEFAULT_REPORT_FILENAME_ROOT: &str = "report-{}.html";

/// File name regex plus the chrono format of its `file_date` group.
#[derive(Debug, Clone)]
pub struct FilenamePattern {
    regex: Regex,
    date_format: String,
}

/// Outcome of matching one file name.
#[derive(Debug, Clone, PartialEq)]
pub enum FilenameMatch {
    /// Name does not follow the pattern at all.
    Unrelated,
    /// Name follows the pattern but the date is not a calendar date.
    BadDate(String),
    Dated(NaiveDate),
}

impl FilenamePattern {
    /// `regex` must contain a `file_date` named group; the caller validates this.
    pub fn new(regex: Regex, date_format: impl Into<String>) -> Self {
        Self {
            regex,
            date_format: date_format.into(),
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn match_name(&self, file_name: &str) -> FilenameMatch {
        let Some(raw) = self
            .regex
            .captures(file_name)
            .and_then(|caps| caps.name(FILE_DATE_GROUP))
            .map(|m| m.as_str())
        else {
            return FilenameMatch::Unrelated;
        };

        match NaiveDate::parse_from_str(raw, &self.date_format) {
            Ok(date) => FilenameMatch::Dated(date),
            Err(_) => FilenameMatch::BadDate(raw.to_string()),
        }
    }
}
