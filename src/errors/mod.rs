use thiserror::Error;

/// Fatal pipeline failures. Anything not listed here (unknown country codes,
/// zero-total countries, unrecognized platform tags) is handled in place and
/// never surfaces as an error.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to fetch dataset from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to parse dataset: {0}")]
    Parse(String),

    #[error("{countries} distinct countries is fewer than the {clusters} requested clusters")]
    InsufficientData { countries: usize, clusters: usize },
}

impl PipelineError {
    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(reason: impl ToString) -> Self {
        Self::Parse(reason.to_string())
    }
}

impl From<csv::Error> for PipelineError {
    fn from(e: csv::Error) -> Self {
        Self::parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_data_message_names_both_counts() {
        let err = PipelineError::InsufficientData {
            countries: 3,
            clusters: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn fetch_error_includes_url() {
        let err = PipelineError::fetch("https://example.com/data.csv", "timed out");
        assert!(err.to_string().contains("https://example.com/data.csv"));
    }
}
