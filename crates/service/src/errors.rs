use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("user with id {0} was not found")]
    NotFound(Uuid),
}
