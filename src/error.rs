use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The remote responded with a non-successful HTTP status
    Status,
    /// A mandatory parameter was missing or empty; raised before any network call
    Validation,
    /// A successful response carried a body that was not valid JSON
    Decode,
    /// Connection-level failure (DNS, refusal, reset)
    Transport,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        body: S,
    ) -> Self {
        Status {
            status_code,
            method,
            path,
            body: body.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// A non-2xx HTTP response.
///
/// `body` holds the raw, un-parsed response text exactly as the server sent it.
#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    pub body: String,
}

impl Status {
    /// The reason phrase of the status line, when one is defined.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.status_code.canonical_reason()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.path, self.body
        )
    }
}

impl StdError for Status {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        // Body-decoding failures inside reqwest are decode errors; everything
        // else (connect, DNS, reset, builder) surfaces as-is so callers can
        // still downcast to the original reqwest::Error.
        let kind = if e.is_decode() {
            Kind::Decode
        } else if e.is_builder() {
            Kind::Internal
        } else {
            Kind::Transport
        };
        Error::with_source(kind, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Decode, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        Error::with_source(Kind::Status, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_should_succeed() {
        let status = Status {
            status_code: StatusCode::NOT_FOUND,
            method: Method::GET,
            path: "/public/game/abc".to_owned(),
            body: r#"{"error":"Not Found"}"#.to_owned(),
        };

        assert_eq!(
            status.to_string(),
            r#"error(404 Not Found) making GET call to /public/game/abc with {"error":"Not Found"}"#
        );
        assert_eq!(status.message(), Some("Not Found"));
    }

    #[test]
    fn status_into_error_should_succeed() {
        let status = Status {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            method: Method::GET,
            path: "/public/games".to_owned(),
            body: "boom".to_owned(),
        };

        let error: Error = status.into();

        assert_eq!(error.kind(), Kind::Status);
        let inner = error.downcast_ref::<Status>().expect("status payload");
        assert_eq!(inner.body, "boom");
    }

    #[test]
    fn validation_into_error_should_succeed() {
        let error = Error::validation("start and end timestamps are required");

        assert_eq!(error.kind(), Kind::Validation);
        assert!(error.to_string().contains("start and end"));
    }

    #[test]
    fn json_error_maps_to_decode() {
        let e = serde_json::from_str::<serde_json::Value>("not json").expect_err("must not parse");
        let error: Error = e.into();
        assert_eq!(error.kind(), Kind::Decode);
    }
}
