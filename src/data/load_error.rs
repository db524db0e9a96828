use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum LoadError {
    /// Transport failure while fetching the dataset.
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    Io(String),
    /// The payload is not valid CSV or a cell has the wrong type.
    Parse(String),
    /// A column the dashboard relies on is absent from the header.
    MissingColumn(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "Network error: {msg}"),
            LoadError::Status(code) => write!(f, "Dataset download failed with HTTP {code}"),
            LoadError::Io(msg) => write!(f, "IO error: {msg}"),
            LoadError::Parse(msg) => write!(f, "CSV parse error: {msg}"),
            LoadError::MissingColumn(col) => write!(f, "Dataset is missing column '{col}'"),
        }
    }
}

impl Error for LoadError {}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
