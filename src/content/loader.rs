//! Loader for movement content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::MovementContentDef;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Supported content encodings, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Ron,
    Json,
}

impl ContentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ron" => Some(ContentFormat::Ron),
            "json" => Some(ContentFormat::Json),
            _ => None,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse movement content already read into memory.
pub fn parse_movement_content(
    contents: &str,
    format: ContentFormat,
    file_name: &str,
) -> Result<MovementContentDef, ContentLoadError> {
    let parsed = match format {
        ContentFormat::Ron => ron_options()
            .from_str(contents)
            .map_err(|e| e.to_string()),
        ContentFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
    };

    parsed.map_err(|e| ContentLoadError {
        file: file_name.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load movement content from a `.ron` or `.json` file.
pub fn load_movement_content(path: &Path) -> Result<MovementContentDef, ContentLoadError> {
    let file_name = path.display().to_string();
    let format = ContentFormat::from_path(path).ok_or_else(|| ContentLoadError {
        file: file_name.clone(),
        message: "Unsupported extension, expected .ron or .json".to_string(),
    })?;

    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_movement_content(&contents, format, &file_name)
}
