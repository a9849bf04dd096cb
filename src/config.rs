use log::LevelFilter;
use serde_json::Value;

use error::GridError;
use grid::DEFAULT_VALID_MARKER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text, Json,
}

/// Run settings, read from the JSON header line.
#[derive(Debug, Clone)]
pub struct Constants {
    pub valid_marker: i64,
    pub report: ReportFormat,
    pub verify: bool,
    pub log_level: LevelFilter,
    pub log_file: Option<String>,
    // collected while parsing, before any logger exists
    pub warnings: Vec<String>,
}

impl Default for Constants {
    fn default() -> Constants {
        Constants {
            valid_marker: DEFAULT_VALID_MARKER,
            report: ReportFormat::Text,
            verify: false,
            log_level: LevelFilter::Warn,
            log_file: None,
            warnings: Vec::new(),
        }
    }
}

impl Constants {
    pub fn parse(line: &str) -> Result<Constants, GridError> {
        if line.trim().is_empty() {
            return Ok(Constants::default());
        }
        let json: Value = serde_json::from_str(line)
            .map_err(|e| GridError::Config { reason: e.to_string() })?;
        if !json.is_object() {
            return Err(GridError::Config { reason: format!("expected a JSON object, got {}", json) });
        }
        Ok(Constants::from_json(&json))
    }

    pub fn from_json(json: &Value) -> Constants {
        let mut c = Constants::default();

        match &json["VALID_MARKER"] {
            Value::Null => {}
            v => match v.as_i64() {
                Some(m) => c.valid_marker = m,
                None => c.warnings.push(format!("VALID_MARKER {} is not an integer, using {}", v, c.valid_marker)),
            },
        }

        match &json["REPORT"] {
            Value::Null => {}
            v => match v.as_str() {
                Some("text") => c.report = ReportFormat::Text,
                Some("json") => c.report = ReportFormat::Json,
                _ => c.warnings.push(format!("REPORT {} is not \"text\" or \"json\", using text", v)),
            },
        }

        match &json["VERIFY"] {
            Value::Null => {}
            v => match v.as_bool() {
                Some(b) => c.verify = b,
                None => c.warnings.push(format!("VERIFY {} is not a bool, ignoring", v)),
            },
        }

        match &json["LOG_LEVEL"] {
            Value::Null => {}
            v => match v.as_str().and_then(|s| s.parse::<LevelFilter>().ok()) {
                Some(level) => c.log_level = level,
                None => c.warnings.push(format!("LOG_LEVEL {} is not a log level, using {}", v, c.log_level)),
            },
        }

        match &json["LOG_FILE"] {
            Value::Null => {}
            v => match v.as_str() {
                Some(path) => c.log_file = Some(path.to_string()),
                None => c.warnings.push(format!("LOG_FILE {} is not a string, ignoring", v)),
            },
        }

        c
    }
}
