use thiserror::Error;

use crate::geometry::{Coord, Point};

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Missing required collaborator: {role}")]
    MissingCollaborator { role: String },

    #[error("Invalid extent {width} x {height}: both sides must be finite and non-negative")]
    InvalidExtent { width: Coord, height: Coord },

    #[error("Top-right {top_right} does not dominate bottom-left {bottom_left}")]
    ImproperRegion { bottom_left: Point, top_right: Point },

    #[error("No shape at index {index} (editor holds {len})")]
    ShapeNotFound { index: usize, len: usize },

    #[error("Failed to parse config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PatternError {
    pub fn missing(role: impl Into<String>) -> Self {
        Self::MissingCollaborator { role: role.into() }
    }
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        PatternError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_collaborator_message() {
        let err = PatternError::missing("window contents");
        assert_eq!(
            err.to_string(),
            "Missing required collaborator: window contents"
        );
    }

    #[test]
    fn test_toml_error_converts() {
        let parsed: Result<toml::Value, _> = toml::from_str("= nope");
        let err = PatternError::from(parsed.unwrap_err());
        assert!(matches!(err, PatternError::Config(_)));
    }
}
