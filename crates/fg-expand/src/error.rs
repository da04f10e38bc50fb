use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("bad time value in stop_times: {0}")]
    Time(#[from] fg_core::CoreError),
}

pub type ExpandResult<T> = Result<T, ExpandError>;
