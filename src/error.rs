use std::error;
use std::fmt;

/// All possible adapter errors.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A required credential is missing or empty. Raised before any
    /// network activity; the message names the offending field.
    Config(String),
    /// The provider answered with a non-2xx status. Carries the literal
    /// status and raw body so callers can inspect the rejection reason.
    Api { status: u16, body: String },
    UrlParse(String),
    RequestTimeout,
    Request(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Config(ref msg) => write!(f, "Config: {}", msg),
            Error::Api { status, ref body } => {
                write!(f, "Api: status = {}, body = {}", status, body)
            }
            Error::UrlParse(ref msg) => write!(f, "UrlParse: {}", msg),
            Error::RequestTimeout => f.write_str("RequestTimeout"),
            Error::Request(ref msg) => write!(f, "Request: {}", msg),
        }
    }
}

impl error::Error for Error {}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::UrlParse(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::RequestTimeout
        } else {
            Self::Request(err.to_string())
        }
    }
}
