use thiserror::Error;

/// Top-level error type for the freespace workspace model.
#[derive(Debug, Error)]
pub enum FreespaceError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised when a workspace or obstacle would be geometrically
/// meaningless.
///
/// Validation is eager: a rejected construction or add leaves the
/// workspace unchanged, so a degenerate shape can never reach the
/// collision queries.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{parameter} = {value} must be positive")]
    NonPositiveExtent {
        parameter: &'static str,
        value: f64,
    },

    #[error("degenerate rectangle: width = {width}, height = {height}")]
    DegenerateRect { width: f64, height: f64 },

    #[error("negative circle radius: {0}")]
    NegativeRadius(f64),

    #[error("wall gap {wall_gap} leaves no room for the {segment} wall segment (limit {limit})")]
    WallGapTooLarge {
        wall_gap: f64,
        segment: &'static str,
        limit: f64,
    },
}

/// Convenience type alias for results using [`FreespaceError`].
pub type Result<T> = std::result::Result<T, FreespaceError>;
