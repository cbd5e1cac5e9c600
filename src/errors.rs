use std::fmt::Display;

#[derive(Debug, PartialEq, Eq)]
pub enum HeapdexError {
    DuplicateValue,
    EmptyCollection(&'static str),
    NotFound,
    OutOfBounds(usize, usize),
}

impl Display for HeapdexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapdexError::DuplicateValue => {
                write!(f, "Value is already present in the heap")
            }
            HeapdexError::EmptyCollection(op) => {
                write!(f, "Cannot {} from an empty collection", op)
            }
            HeapdexError::NotFound => {
                write!(f, "Value not found in the heap")
            }
            HeapdexError::OutOfBounds(index, length) => {
                write!(f, "Index {} out of bounds for length {}", index, length)
            }
        }
    }
}

impl std::error::Error for HeapdexError {}
