use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidBounds {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },
    OutOfRange {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidBounds {
                left,
                top,
                right,
                bottom,
            } => {
                write!(
                    f,
                    "rectangle bounds must satisfy left < right and top < bottom (left: {}, top: {}, right: {}, bottom: {})",
                    left, top, right, bottom
                )
            }
            QuadtreeError::OutOfRange {
                left,
                top,
                right,
                bottom,
            } => {
                write!(
                    f,
                    "object rectangle intersects a split node but none of its quadrants (left: {}, top: {}, right: {}, bottom: {})",
                    left, top, right, bottom
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
