use thiserror::Error;

/// Failures while talking to the browser environment.
///
/// None of these are fatal for the page: callers log them and fall back to
/// the static, non-animated rendering.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("media query `{0}` could not be evaluated")]
    MediaQuery(String),
    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
}
