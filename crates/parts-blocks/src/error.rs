//! Error types for parts-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Managed region not found")]
    RegionNotFound,
}
