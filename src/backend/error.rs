use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum BackendError {
    #[error("Failed to initialize the Document Engine client: {message}")]
    #[diagnostic(
        code(docbridge::backend::init),
        help(
            "Check the DOCBRIDGE_API_TOKEN value for characters that cannot appear in an HTTP header."
        )
    )]
    Init { message: String },

    #[error("Failed to connect to the Document Engine")]
    #[diagnostic(
        code(docbridge::backend::connection_failed),
        help(
            "Is the Document Engine reachable? Check DOCBRIDGE_API_URL and your network connection."
        )
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from the Document Engine: {message}")]
    #[diagnostic(code(docbridge::backend::invalid_response))]
    InvalidResponse { message: String },

    #[error("Document Engine error ({status}): {message}")]
    #[diagnostic(code(docbridge::backend::api_error))]
    ApiError { status: u16, message: String },
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            BackendError::ConnectionFailed { source: e }
        } else {
            BackendError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

pub type BackendResult<T> = Result<T, BackendError>;
