//! # Dataset Schemas
//!
//! A [`SchemaRegistry`] collects the column layout of each dataset a
//! pipeline step produces, and archives them as a single CSV file:
//!
//! ```text
//! variable,type,data_set
//! x_0,u32,encoded
//! y,bool,encoded
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::errors::EnvResult;

/// The header row of an archived schema.
pub const SCHEMA_HEADER: [&str; 3] = ["variable", "type", "data_set"];

/// The column layout of a named dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSchema {
    name: String,
    columns: Vec<(String, String)>,
}

impl DatasetSchema {
    /// Create an empty schema for the named dataset.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column and return the schema.
    ///
    /// ## Arguments
    /// * `variable` - The column name.
    /// * `dtype` - A description of the column type.
    pub fn with_column<V: Into<String>, D: Into<String>>(
        mut self,
        variable: V,
        dtype: D,
    ) -> Self {
        self.push_column(variable, dtype);
        self
    }

    /// Append a column.
    pub fn push_column<V: Into<String>, D: Into<String>>(
        &mut self,
        variable: V,
        dtype: D,
    ) {
        self.columns.push((variable.into(), dtype.into()));
    }

    /// The dataset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ``(variable, type)`` columns, in order.
    pub fn columns(&self) -> &[(String, String)] {
        &self.columns
    }
}

#[derive(Serialize)]
struct SchemaRow<'a> {
    variable: &'a str,
    #[serde(rename = "type")]
    dtype: &'a str,
    data_set: &'a str,
}

/// An ordered collection of dataset schemas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    schemas: Vec<DatasetSchema>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema.
    ///
    /// A schema with the same dataset name replaces the earlier one in place.
    pub fn register(
        &mut self,
        schema: DatasetSchema,
    ) {
        match self.schemas.iter_mut().find(|s| s.name == schema.name) {
            Some(existing) => *existing = schema,
            None => self.schemas.push(schema),
        }
    }

    /// Look up a schema by dataset name.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&DatasetSchema> {
        self.schemas.iter().find(|s| s.name == name)
    }

    /// The number of registered datasets.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterate over the registered schemas, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DatasetSchema> {
        self.schemas.iter()
    }

    /// The archive file name for a pipeline step.
    pub fn archive_file_name(step_name: &str) -> String {
        format!("{step_name}.csv")
    }

    /// Write every registered schema to ``<dir>/<step_name>.csv``.
    ///
    /// ## Arguments
    /// * `step_name` - The pipeline step; names the archive file.
    /// * `dir` - The archive directory; created if absent.
    ///
    /// ## Returns
    /// The path of the written archive.
    pub fn archive<P: AsRef<Path>>(
        &self,
        step_name: &str,
        dir: P,
    ) -> EnvResult<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(Self::archive_file_name(step_name));

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        writer.write_record(SCHEMA_HEADER)?;

        for schema in &self.schemas {
            for (variable, dtype) in &schema.columns {
                writer.serialize(SchemaRow {
                    variable,
                    dtype,
                    data_set: &schema.name,
                })?;
            }
        }
        writer.flush()?;

        log::info!(
            "archived {} dataset schemas to {}",
            self.schemas.len(),
            path.display()
        );
        Ok(path)
    }
}
