use thiserror::Error;

#[derive(Error, Debug)]
pub enum RootRsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
