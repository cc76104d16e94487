use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid chamber configuration: {0}")]
    InvalidConfig(String),
    #[error("{requested} party seats requested but only {available} are free")]
    SeatOverflow { requested: usize, available: usize },
    #[error("seat {seat} is outside a chamber of {capacity} seats")]
    SeatOutOfRange { seat: usize, capacity: usize },
}
