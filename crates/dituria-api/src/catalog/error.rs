use thiserror::Error;

/// Errors from the catalog API client.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_status() {
        let err = CatalogError::Api {
            status: 404,
            message: "deck not found".into(),
        };
        let display = err.to_string();
        assert!(display.contains("404"));
        assert!(display.contains("deck not found"));
    }
}
