//! Errors raised while preparing watch face surfaces

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to decode image: {0}")]
    Image(#[from] cairo::IoError),

    #[error("failed to access surface pixels: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid drawing area {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

pub type Result<T> = std::result::Result<T, RenderError>;
