// Loads stage layouts from JSON files.

use crate::domain::{Level, LevelError, Rect};
use crate::interface_adapters::protocol::LevelFileDto;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum LevelFileError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(LevelError),
}

impl fmt::Display for LevelFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelFileError::Io(e) => write!(f, "failed to read level file: {e}"),
            LevelFileError::Parse(e) => write!(f, "failed to parse level file: {e}"),
            LevelFileError::Invalid(e) => write!(f, "invalid level: {e}"),
        }
    }
}

impl std::error::Error for LevelFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelFileError::Io(e) => Some(e),
            LevelFileError::Parse(e) => Some(e),
            LevelFileError::Invalid(e) => Some(e),
        }
    }
}

pub fn parse_level(text: &str) -> Result<Level, LevelFileError> {
    let dto: LevelFileDto = serde_json::from_str(text).map_err(LevelFileError::Parse)?;
    Level::new(dto.platforms.into_iter().map(Rect::from)).map_err(LevelFileError::Invalid)
}

pub async fn load_level(path: &Path) -> Result<Level, LevelFileError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(LevelFileError::Io)?;
    parse_level(&text)
}
