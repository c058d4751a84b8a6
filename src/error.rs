//! Error types for the translator
//!
//! [`TranslateError`] covers everything that can go wrong during a single
//! translation call. These errors never leave the view: they are turned into
//! the message shown in the error banner by [`TranslateError::user_message`].
//!
//! [`AppError`] covers process-level failures (configuration, terminal setup)
//! that happen before or outside the view.

use thiserror::Error;

/// Failure of one translation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The request never produced a response (DNS, connect, timeout...)
    #[error("{0}")]
    Transport(String),

    /// Response status outside 2xx
    #[error("HTTP ERROR: {status}")]
    Http { status: u16 },

    /// Body did not contain `responseData.translatedText`
    #[error("resposta inválida: {0}")]
    MalformedResponse(String),

    /// MyMemory reported a failure inside an HTTP 200 body
    #[error("API ERROR {status}: {details}")]
    Api { status: u16, details: String },
}

impl TranslateError {
    /// The text shown to the user in the error banner.
    pub fn user_message(&self) -> String {
        format!("Erro ao tentar traduzir: {}. Tente novamente!", self)
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TranslateError::Http {
                status: status.as_u16(),
            },
            None => TranslateError::Transport(err.to_string()),
        }
    }
}

/// Process-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unsupported language code: {0}")]
    UnknownLanguage(String),

    #[error("http client error: {0}")]
    Client(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_message_contains_status() {
        let err = TranslateError::Http { status: 500 };
        assert_eq!(
            err.user_message(),
            "Erro ao tentar traduzir: HTTP ERROR: 500. Tente novamente!"
        );
    }

    #[test]
    fn test_transport_message_is_passed_through() {
        let err = TranslateError::Transport("connection refused".to_string());
        assert!(err.user_message().contains("connection refused"));
    }

    #[test]
    fn test_api_message() {
        let err = TranslateError::Api {
            status: 403,
            details: "INVALID LANGUAGE PAIR".to_string(),
        };
        assert_eq!(err.to_string(), "API ERROR 403: INVALID LANGUAGE PAIR");
    }
}
