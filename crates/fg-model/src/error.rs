use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook is missing expected columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("workbook contains no usable stops")]
    NoStops,
}

pub type ModelResult<T> = Result<T, ModelError>;
