use crate::{commands::ConvertArgs, error::CliError};
use filter_converter::{ConverterSettings, DialectKind};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Settings for the `convert` command, loaded from an optional JSON file and
/// then overridden by command-line flags.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    pub dialect: DialectKind,
    pub column: Option<String>,
    pub max_depth: Option<usize>,
}

impl CliSettings {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        info!("Loading settings from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        serde_json::from_str(&source).map_err(CliError::SettingsParse)
    }

    pub fn resolve(args: &ConvertArgs) -> Result<Self, CliError> {
        let base = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.merge_args(args))
    }

    pub fn merge_args(mut self, args: &ConvertArgs) -> Self {
        if let Some(dialect) = args.dialect {
            self.dialect = dialect;
        }
        if let Some(column) = &args.column {
            self.column = Some(column.clone());
        }
        if let Some(max_depth) = args.max_depth {
            self.max_depth = Some(max_depth);
        }
        self
    }

    pub fn converter_settings(&self) -> ConverterSettings {
        let settings = ConverterSettings::default();
        match self.max_depth {
            Some(max_depth) => settings.with_max_depth(max_depth),
            None => settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_converter::settings::DEFAULT_MAX_DEPTH;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = CliSettings::resolve(&ConvertArgs::default()).unwrap();
        assert_eq!(settings.dialect, DialectKind::PgVector);
        assert_eq!(settings.column, None);
        assert_eq!(settings.converter_settings().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "dialect": "mysql", "column": "attrs", "max_depth": 10 }}"#
        )
        .unwrap();

        let args = ConvertArgs {
            config: Some(file.path().to_path_buf()),
            max_depth: Some(3),
            ..Default::default()
        };
        let settings = CliSettings::resolve(&args).unwrap();

        assert_eq!(settings.dialect, DialectKind::MySql);
        assert_eq!(settings.column.as_deref(), Some("attrs"));
        assert_eq!(settings.converter_settings().max_depth, 3);
    }

    #[test]
    fn test_invalid_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "dialect": "oracle" }}"#).unwrap();

        let err = CliSettings::load(file.path()).unwrap_err();
        assert!(matches!(err, CliError::SettingsParse(_)));
    }
}
