use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart backend failed: {0}")]
    Backend(String),

    #[error("container is unavailable for mounting")]
    ContainerUnavailable,
}
