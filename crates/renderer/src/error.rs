use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to encode the document: {0}")]
    Encoding(#[from] std::fmt::Error),
}
