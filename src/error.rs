use thiserror::Error;

use crate::model::VertexId;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {0} out of range")]
    OutOfRange(VertexId),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("corruption detected: {0}")]
    Corruption(&'static str),
}
