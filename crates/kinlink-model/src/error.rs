use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A raw record is too short to carry every positional field we read.
    #[error("malformed record: {fields} fields, at least {required} required")]
    MalformedRecord { fields: usize, required: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
