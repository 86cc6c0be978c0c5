use crate::ElementType;

/// Broad classification of a [`ViewError`], used by hosts to pick which
/// exception type to raise.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Generic,
    Range,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("Byte offset is not aligned.")]
    Misaligned { offset: usize, ty: ElementType },
    #[error("Byte offset / length out of range.")]
    OutOfRange {
        offset: usize,
        byte_length: Option<usize>,
        buffer_length: usize,
    },
    #[error("Unknown element type: {0}")]
    UnknownElementType(String),
    #[error("View is not bound to a buffer")]
    Unbound,
    #[error("Index {index} out of bounds for view of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Element type mismatch, requested: {requested}, bound: {bound}")]
    TypeMismatch {
        requested: ElementType,
        bound: ElementType,
    },
    #[error("Failed to cast view bytes: {0:?}")]
    Cast(bytemuck::PodCastError),
}

impl ViewError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ViewError::Misaligned { .. } | ViewError::Cast(_) => ErrorKind::Generic,
            ViewError::OutOfRange { .. } | ViewError::IndexOutOfBounds { .. } => ErrorKind::Range,
            ViewError::UnknownElementType(_)
            | ViewError::Unbound
            | ViewError::TypeMismatch { .. } => ErrorKind::Type,
        }
    }
}
