use std::{env::VarError, num::ParseIntError};

use lettre::address::AddressError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("generic error: {0}")]
    Generic(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("error parsing json: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("email template not found: {0}")]
    TemplateNotFound(String),
    #[error("generic email error: {0}")]
    Lettre(#[from] lettre::error::Error),
    #[error("smtp error: {0}")]
    LettreSmtp(#[from] lettre::transport::smtp::Error),
    #[error("environment variable error: {0}")]
    Var(#[from] VarError),
    #[error("email address error: {0}")]
    Address(#[from] AddressError),
    #[error("int parsing error: {0}")]
    ParseInt(#[from] ParseIntError),
}
