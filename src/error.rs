use thiserror::Error;

use crate::config::ConfigError;
use crate::theme::Role;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {name} must be in 0..=255, got {value}")]
    InvalidArgument { name: &'static str, value: u32 },

    #[error("Unknown theme role: {0}")]
    UnknownRole(String),

    #[error("Theme '{theme}' is missing role: {role}")]
    IncompleteTheme { theme: String, role: Role },

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
