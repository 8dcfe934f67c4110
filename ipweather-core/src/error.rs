use reqwest::StatusCode;

/// Everything that can stop a weather report.
///
/// None of these are recovered; the caller is expected to log and exit.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// Missing credential or an unusable setting.
    #[error("{0}")]
    Config(String),

    #[error("Failed to send request to {service}")]
    Network {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse {service} JSON")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{service} rejected the API key (status {status}): {body}")]
    Auth {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The geolocation service answered, but with `"status": "fail"`.
    #[error("Geolocation lookup failed: {message}")]
    Lookup { message: String },

    #[error("Failed to write report")]
    Output(#[from] std::io::Error),
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;

/// Cut a response body down to something that fits in one log line.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn long_body_is_cut_on_char_boundary() {
        let body = "ж".repeat(300);
        let cut = truncate_body(&body);

        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }
}
