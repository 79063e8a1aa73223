//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

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

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse RON text containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(contents: &str, file_name: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse RON text containing a single struct (not wrapped in DataFile).
pub fn parse_single<T>(contents: &str, file_name: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn parse_tuning(contents: &str) -> Result<TuningFile, ContentLoadError> {
    parse_single(contents, "tuning.ron")
}

/// Parse a levels file, rejecting one that defines no levels.
pub fn parse_levels(contents: &str) -> Result<Vec<LevelDef>, ContentLoadError> {
    let levels: Vec<LevelDef> = parse_data_file(contents, "levels.ron")?;
    if levels.is_empty() {
        return Err(ContentLoadError {
            file: "levels.ron".to_string(),
            message: "no levels defined".to_string(),
        });
    }
    Ok(levels)
}

pub fn load_tuning(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let contents = read_file(path)?;
    parse_tuning(&contents).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: e.message,
    })
}

pub fn load_levels(path: &Path) -> Result<Vec<LevelDef>, ContentLoadError> {
    let contents = read_file(path)?;
    parse_levels(&contents).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: e.message,
    })
}
