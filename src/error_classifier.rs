use crate::analytics::error::AnalyticsError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &AnalyticsError) -> LogLevel {
        match error {
            // Non-critical: Temporary server issues
            AnalyticsError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            AnalyticsError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: Auth, malformed responses
            AnalyticsError::Http { status, .. } if *status == 401 => LogLevel::Error,
            AnalyticsError::Http { status, .. } if *status == 403 => LogLevel::Error,
            AnalyticsError::Decode(_) => LogLevel::Error,

            // A well-formed response with no payload: nothing to render
            AnalyticsError::MissingData { .. } => LogLevel::Warn,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> AnalyticsError {
        AnalyticsError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_classify_http_statuses() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(429)), LogLevel::Debug);
        assert_eq!(classifier.classify_fetch_error(&http(500)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(401)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(403)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Warn);
    }

    #[test]
    fn test_classify_payload_errors() {
        let classifier = ErrorClassifier::new();

        let decode = AnalyticsError::Decode(
            serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
        );
        assert_eq!(classifier.classify_fetch_error(&decode), LogLevel::Error);

        let missing = AnalyticsError::MissingData {
            endpoint: "kpis".to_string(),
        };
        assert_eq!(classifier.classify_fetch_error(&missing), LogLevel::Warn);
    }
}
