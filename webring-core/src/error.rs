use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RingError {
    #[error("The ring has no members")]
    EmptyRing,

    #[error("Index {0} is outside the ring")]
    IndexOutOfBounds(usize),

    #[error("No member with UUID '{0}' in the ring")]
    UnknownSite(String),
}

pub type Result<T> = std::result::Result<T, RingError>;
