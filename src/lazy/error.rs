use thiserror::Error;

/// Errors raised inside a lazy image instance.
///
/// None of these ever reach the host: the component logs them and keeps its
/// current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LazyImageError {
    /// A passthrough attribute tried to override an attribute the component owns.
    #[error("attribute '{0}' is owned by the lazy image and cannot be passed through")]
    ReservedAttribute(&'static str),

    /// A load completion arrived before the image was ever reported in view.
    #[error("image cannot be marked loaded before it has been in view")]
    NotInView,

    /// The visibility or decode script failed on the platform side.
    #[error("{operation} script failed: {message}")]
    Script {
        operation: &'static str,
        message: String,
    },
}
