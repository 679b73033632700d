use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Layout error: {0}")]
    Layout(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, BindecError>;
