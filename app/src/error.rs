use sapper_core::GameError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cannot access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed document")]
    Xml(#[from] roxmltree::Error),
    #[error("Element <{element}> has no attribute {attribute:?}")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
    #[error("Attribute {attribute:?} has invalid value {value:?}")]
    InvalidAttribute {
        attribute: &'static str,
        value: String,
    },
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Invalid date or time")]
    Date(#[from] time::error::ComponentRange),
}

pub type Result<T> = std::result::Result<T, AppError>;
