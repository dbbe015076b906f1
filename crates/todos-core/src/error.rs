use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
