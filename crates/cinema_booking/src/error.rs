use crate::constants::{MAX_ROWS, MAX_SEATS_PER_ROW, MIN_ROWS, MIN_SEATS_PER_ROW};
use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookingError>;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Please provide all three values (Title, Rows, Seats per Row)")]
    MissingSetupValues,

    #[error("Number of rows must be between {} and {}", MIN_ROWS, MAX_ROWS)]
    RowsOutOfRange(i64),

    #[error("Seats per row must be between {} and {}", MIN_SEATS_PER_ROW, MAX_SEATS_PER_ROW)]
    SeatsOutOfRange(i64),

    #[error("Row and seats per row must be numbers")]
    NonNumericDimensions,

    #[error("Seat {seat} is already taken")]
    SeatTaken { seat: String },

    #[error("Seat at row {row}, column {col} is outside the seating map")]
    SeatOutOfBounds { row: usize, col: usize },

    #[error("Input closed before {0}")]
    InputClosed(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to read config file {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
