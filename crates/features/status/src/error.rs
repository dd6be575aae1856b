use std::borrow::Cow;
use vinewood_kernel::error::format_context;

/// Errors of the status slice.
///
/// Probe failures are recovered into fallback snapshots; only building the HTTP
/// client can fail outright.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("Status client error{}: {source}", format_context(.context))]
    Client { source: reqwest::Error, context: Option<Cow<'static, str>> },
}

pub trait StatusErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, StatusError>;
}

impl<T> StatusErrorExt<T> for Result<T, reqwest::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, StatusError> {
        self.map_err(|source| StatusError::Client { source, context: Some(context.into()) })
    }
}

impl From<reqwest::Error> for StatusError {
    fn from(source: reqwest::Error) -> Self {
        Self::Client { source, context: None }
    }
}
