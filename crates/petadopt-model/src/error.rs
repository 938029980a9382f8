use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("image slot {index} is out of range (capacity {capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },
    #[error("unknown {kind}: {value}")]
    UnknownChoice { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
