#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum Error {
    #[from]
    #[display("{source}")]
    Validation { source: ValidationError },
    #[display("page size must be greater than zero but got {limit}")]
    InvalidLimit {
        #[error(not(source))]
        limit: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("Base URL is missing")]
    BaseUrlMissing,
}
