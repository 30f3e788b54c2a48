// ---------------------------------------------------------------------------
// AppError: failures of a single render job
// ---------------------------------------------------------------------------

use std::fmt;
use std::io;

use layout::LayoutError;
use rendering::RenderError;

#[derive(Debug)]
pub enum AppError {
    /// Reading the statistics or parameter file, or writing the output, failed.
    Io(io::Error),
    /// The statistics file is not valid JSON.
    Stats(serde_json::Error),
    /// Parameters were rejected, or the layout failed.
    Layout(LayoutError),
    /// The SVG document could not be written.
    Render(RenderError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Stats(e) => write!(f, "Invalid statistics: {e}"),
            AppError::Layout(e) => write!(f, "{e}"),
            AppError::Render(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Stats(e) => Some(e),
            AppError::Layout(e) => Some(e),
            AppError::Render(e) => Some(e),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Stats(e)
    }
}

impl From<LayoutError> for AppError {
    fn from(e: LayoutError) -> Self {
        AppError::Layout(e)
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e)
    }
}
