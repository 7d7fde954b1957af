pub type Result<T> = std::result::Result<T, RouteError>;

/// Failures caused by malformed route input. All are deterministic; the
/// corridor has to be regenerated upstream before retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    #[error("illegal triangle list: triangle {index} shares {shared} vertices with its successor (expected 2)")]
    IllegalTriangleList { index: usize, shared: usize },
    #[error("triangle {triangle} references vertex {index} but only {len} vertices exist")]
    VertexOutOfRange { triangle: usize, index: u32, len: usize },
    #[error("invalid shrink range [{min}, {max}]: bounds must lie within [0, 1]")]
    InvalidShrinkRange { min: f64, max: f64 },
}

impl RouteError {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            RouteError::IllegalTriangleList { .. } => "illegal_triangle_list",
            RouteError::VertexOutOfRange { .. } => "vertex_out_of_range",
            RouteError::InvalidShrinkRange { .. } => "invalid_shrink_range",
        }
    }
}
