// ---------------------------------------------------------------------------
// RenderError: failures while writing a rendered city
// ---------------------------------------------------------------------------

use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    /// Writing to the output stream failed.
    Io(std::io::Error),
    /// Formatting into an in-memory buffer failed.
    Fmt(fmt::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "I/O error: {e}"),
            RenderError::Fmt(e) => write!(f, "Formatting error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            RenderError::Fmt(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<fmt::Error> for RenderError {
    fn from(e: fmt::Error) -> Self {
        RenderError::Fmt(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display_io() {
        let err = RenderError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "client went away",
        ));
        let msg = format!("{err}");
        assert!(msg.contains("I/O error"), "got: {msg}");
        assert!(msg.contains("client went away"), "got: {msg}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_render_error_from_fmt() {
        let err: RenderError = fmt::Error.into();
        assert!(matches!(err, RenderError::Fmt(_)));
    }
}
