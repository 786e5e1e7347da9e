//! # Configuration
//!
//! Configuration is a TOML table, read once at startup.
//!
//! [`FileConfig::load`] reads the primary file, and falls back to
//! ``<path>.template`` when the primary cannot be opened.
//! Values are never validated at load time; typed accessors on
//! [`ConfigProvider`] validate on read.

use std::{
    fs,
    path::{Path, PathBuf},
};

use toml::{Table, Value};

use crate::{
    CHARSEQ_CONFIG_PATHS,
    errors::{EnvError, EnvResult},
    path_resolver::template_path,
};

/// The fixed sequence width key.
pub const X_MAXLEN: &str = "x_maxlen";

/// The schema archive directory key.
pub const DATA_SCHEMA_DIR: &str = "data_schema_dir";

/// Look up a possibly dotted name (``a.b.c``) in a table.
fn lookup<'a>(
    table: &'a Table,
    name: &str,
) -> Option<&'a Value> {
    if let Some(value) = table.get(name) {
        return Some(value);
    }

    let mut parts = name.split('.');
    let mut value = table.get(parts.next()?)?;
    for part in parts {
        value = value.as_table()?.get(part)?;
    }
    Some(value)
}

/// A source of named configuration values.
pub trait ConfigProvider {
    /// Get a raw value by name.
    ///
    /// Dotted names address nested tables.
    fn get(
        &self,
        name: &str,
    ) -> Option<&Value>;

    /// Get a raw value by name, failing if it is absent.
    fn require(
        &self,
        name: &str,
    ) -> EnvResult<&Value> {
        self.get(name).ok_or_else(|| EnvError::ConfigKeyMissing {
            name: name.to_string(),
        })
    }

    /// Get a non-negative integer value.
    fn get_usize(
        &self,
        name: &str,
    ) -> EnvResult<usize> {
        self.require(name)?
            .as_integer()
            .and_then(|i| usize::try_from(i).ok())
            .ok_or_else(|| EnvError::ConfigValue {
                name: name.to_string(),
                expected: "a non-negative integer",
            })
    }

    /// Get a string value.
    fn get_str(
        &self,
        name: &str,
    ) -> EnvResult<&str> {
        self.require(name)?
            .as_str()
            .ok_or_else(|| EnvError::ConfigValue {
                name: name.to_string(),
                expected: "a string",
            })
    }

    /// Get a path value; ``~`` and ``$VAR`` references are expanded.
    fn get_path(
        &self,
        name: &str,
    ) -> EnvResult<PathBuf> {
        let raw = self.get_str(name)?;
        Ok(PathBuf::from(shellexpand::full(raw)?.into_owned()))
    }

    /// The fixed sequence width; a positive integer.
    fn x_maxlen(&self) -> EnvResult<usize> {
        match self.get_usize(X_MAXLEN)? {
            0 => Err(EnvError::ConfigValue {
                name: X_MAXLEN.to_string(),
                expected: "a positive integer",
            }),
            maxlen => Ok(maxlen),
        }
    }

    /// The directory schema archives are written to.
    fn data_schema_dir(&self) -> EnvResult<PathBuf> {
        self.get_path(DATA_SCHEMA_DIR)
    }
}

/// An in-memory configuration table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapConfig {
    table: Table,
}

impl From<Table> for MapConfig {
    fn from(table: Table) -> Self {
        Self { table }
    }
}

impl MapConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value and return the configuration.
    pub fn with<V: Into<Value>>(
        mut self,
        name: &str,
        value: V,
    ) -> Self {
        self.table.insert(name.to_string(), value.into());
        self
    }

    /// The underlying table.
    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl ConfigProvider for MapConfig {
    fn get(
        &self,
        name: &str,
    ) -> Option<&Value> {
        lookup(&self.table, name)
    }
}

/// A configuration loaded from a TOML file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileConfig {
    source: PathBuf,
    table: Table,
}

impl FileConfig {
    /// Load configuration from a file, falling back to its template.
    ///
    /// ## Arguments
    /// * `path` - The primary configuration path.
    ///
    /// ## Returns
    /// The loaded configuration; or [`EnvError::ConfigMissing`]
    /// if neither the file nor ``<path>.template`` can be read.
    pub fn load<P: AsRef<Path>>(path: P) -> EnvResult<Self> {
        let path = path.as_ref();
        log::info!("attempting to load conf from path: {}", path.display());

        match fs::read_to_string(path) {
            Ok(text) => Self::parse(path, &text),
            Err(err) => {
                let template = template_path(path);
                log::warn!(
                    "unable to open conf file ({err}); attempting to load template: {}",
                    template.display()
                );

                match fs::read_to_string(&template) {
                    Ok(text) => Self::parse(&template, &text),
                    Err(_) => Err(EnvError::ConfigMissing {
                        primary: path.to_path_buf(),
                        template,
                    }),
                }
            }
        }
    }

    /// Resolve the configuration path, then [`load`](Self::load) it.
    ///
    /// See [`ConfigPathResolver::resolve_config_path`](crate::ConfigPathResolver::resolve_config_path).
    pub fn resolve<P: AsRef<Path>>(path: Option<P>) -> EnvResult<Self> {
        let path = CHARSEQ_CONFIG_PATHS
            .resolve_config_path(path)
            .ok_or(EnvError::ConfigUnresolved)?;
        Self::load(path)
    }

    /// Parse configuration text.
    ///
    /// ## Arguments
    /// * `source` - The path the text was read from; used in errors.
    /// * `text` - The TOML text.
    pub fn parse<P: AsRef<Path>>(
        source: P,
        text: &str,
    ) -> EnvResult<Self> {
        let source = source.as_ref().to_path_buf();
        match text.parse::<Table>() {
            Ok(table) => Ok(Self { source, table }),
            Err(err) => Err(EnvError::ConfigParse {
                path: source,
                source: err,
            }),
        }
    }

    /// The file the configuration was read from.
    ///
    /// This is the template path when the fallback was used.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The underlying table.
    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl ConfigProvider for FileConfig {
    fn get(
        &self,
        name: &str,
    ) -> Option<&Value> {
        lookup(&self.table, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_config() {
        let config = MapConfig::new()
            .with(X_MAXLEN, 280_i64)
            .with(DATA_SCHEMA_DIR, "/tmp/schemas")
            .with("name", "reddit");

        assert_eq!(config.x_maxlen().unwrap(), 280);
        assert_eq!(config.get_str("name").unwrap(), "reddit");
        assert_eq!(
            config.data_schema_dir().unwrap(),
            PathBuf::from("/tmp/schemas")
        );
    }

    #[test]
    fn test_missing_and_mistyped() {
        let config = MapConfig::new()
            .with(X_MAXLEN, "wide")
            .with("negative", -1_i64)
            .with("zero", 0_i64);

        assert!(matches!(
            config.require("absent"),
            Err(EnvError::ConfigKeyMissing { name }) if name == "absent"
        ));
        assert!(matches!(
            config.x_maxlen(),
            Err(EnvError::ConfigValue { expected: "a non-negative integer", .. })
        ));
        assert!(matches!(
            config.get_usize("negative"),
            Err(EnvError::ConfigValue { .. })
        ));
        assert!(matches!(
            config.get_str("zero"),
            Err(EnvError::ConfigValue { expected: "a string", .. })
        ));

        let config = MapConfig::new().with(X_MAXLEN, 0_i64);
        assert!(matches!(
            config.x_maxlen(),
            Err(EnvError::ConfigValue { expected: "a positive integer", .. })
        ));
    }

    #[test]
    fn test_parse() {
        let config = FileConfig::parse(
            "conf.toml",
            r#"
            x_maxlen = 100
            data_schema_dir = "schemas"

            [model]
            name = "lstm"
            "#,
        )
        .unwrap();

        assert_eq!(config.source(), Path::new("conf.toml"));
        assert_eq!(config.x_maxlen().unwrap(), 100);
        assert_eq!(config.get_str("model.name").unwrap(), "lstm");
        assert!(config.get("model.absent").is_none());
        assert!(config.get("x_maxlen.deeper").is_none());
    }

    #[test]
    fn test_parse_error() {
        let err = FileConfig::parse("bad.toml", "x_maxlen = = 3").unwrap_err();
        assert!(matches!(err, EnvError::ConfigParse { .. }));
        assert!(err.to_string().starts_with("failed to parse configuration bad.toml"));
    }
}
