//! Constraint configuration for project creation.

use super::field::Constraints;
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Constraint sets applied to each field of the project form.
///
/// The defaults are the board's standard rules: a required title, a
/// required description of 6 to 50 characters, and 1 to 5 people.
///
/// # Examples
///
/// ```
/// use project_board::validation::ProjectConstraints;
///
/// let config = ProjectConstraints::from_json_str(r#"{ "people": { "required": true, "max_value": 9 } }"#)
///     .expect("valid configuration");
/// assert_eq!(config.people.max_value, Some(9));
/// assert_eq!(config.description.min_length, Some(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConstraints {
    /// Constraints for the project title.
    pub title: Constraints,
    /// Constraints for the project description.
    pub description: Constraints,
    /// Constraints for the number of people.
    pub people: Constraints,
}

impl Default for ProjectConstraints {
    fn default() -> Self {
        Self {
            title: Constraints::new().required(),
            description: Constraints::new()
                .required()
                .with_min_length(6)
                .with_max_length(50),
            people: Constraints::new()
                .required()
                .with_min_value(1)
                .with_max_value(5),
        }
    }
}

impl ProjectConstraints {
    /// Parses a configuration from JSON. Omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the JSON is malformed or names an
    /// unknown field.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn from_json_file(path: impl AsRef<Utf8Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let contents = read_config_file(file).map_err(|source| ConfigError::Read {
            path: file.to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

/// Opens the file's parent directory with ambient authority and reads the
/// file relative to it.
fn read_config_file(path: &Utf8Path) -> io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path does not name a file")
    })?;
    let parent = match path.parent() {
        Some(parent_dir) if !parent_dir.as_str().is_empty() => parent_dir,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}

/// Errors returned while loading constraint configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read constraint configuration {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`ProjectConstraints`].
    #[error("invalid constraint configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_matches_board_rules() {
        let config = ProjectConstraints::default();

        assert_eq!(config.title, Constraints::new().required());
        assert_eq!(config.description.min_length, Some(6));
        assert_eq!(config.description.max_length, Some(50));
        assert_eq!(config.people.min_value, Some(1));
        assert_eq!(config.people.max_value, Some(5));
    }

    #[rstest]
    fn empty_object_yields_defaults() -> eyre::Result<()> {
        let config = ProjectConstraints::from_json_str("{}")?;
        eyre::ensure!(config == ProjectConstraints::default());
        Ok(())
    }

    #[rstest]
    fn partial_field_replaces_only_that_field() -> eyre::Result<()> {
        let config = ProjectConstraints::from_json_str(r#"{ "title": { "max_length": 20 } }"#)?;

        eyre::ensure!(!config.title.required);
        eyre::ensure!(config.title.max_length == Some(20));
        eyre::ensure!(config.people == ProjectConstraints::default().people);
        Ok(())
    }

    #[rstest]
    #[case::unknown_field(r#"{ "budget": {} }"#)]
    #[case::unknown_constraint(r#"{ "title": { "pattern": "x" } }"#)]
    #[case::wrong_type(r#"{ "people": { "min_value": "one" } }"#)]
    fn malformed_json_is_rejected(#[case] json: &str) {
        let result = ProjectConstraints::from_json_str(json);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[rstest]
    fn missing_file_reports_path() {
        let result = ProjectConstraints::from_json_file("/nonexistent/constraints.json");
        match result {
            Err(ConfigError::Read { path, .. }) => {
                assert_eq!(path, "/nonexistent/constraints.json");
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[rstest]
    #[case::root("/")]
    #[case::parent_only("..")]
    fn path_without_file_name_is_a_read_error(#[case] path: &str) {
        let result = ProjectConstraints::from_json_file(path);
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[rstest]
    fn file_contents_are_parsed() -> eyre::Result<()> {
        let temp = camino::Utf8PathBuf::from_path_buf(std::env::temp_dir())
            .map_err(|path| eyre::eyre!("temp dir is not UTF-8: {}", path.display()))?;
        let dir = Dir::open_ambient_dir(&temp, ambient_authority())?;
        let name = format!("project-board-constraints-{}.json", uuid::Uuid::new_v4());
        dir.write(&name, r#"{ "people": { "required": true, "max_value": 12 } }"#)?;

        let loaded = ProjectConstraints::from_json_file(temp.join(&name));
        dir.remove_file(&name)?;

        let config = loaded?;
        eyre::ensure!(config.people.max_value == Some(12));
        eyre::ensure!(config.title == ProjectConstraints::default().title);
        Ok(())
    }
}
