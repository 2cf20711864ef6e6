use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevpickError {
    #[error("Invalid API base URL '{0}'.\n\nPass a full URL like http://localhost:8000 via --api-url or config.")]
    InvalidApiUrl(String),
}
