//! Content tables loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::tables::ContentTables;

/// Loader for [`ContentTables`] from RON or TOML files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load and validate content tables.
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as RON.
    pub fn load(path: &Path) -> LoadResult<ContentTables> {
        let content = read_file(path)?;
        let tables = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&content)?,
            _ => Self::from_ron(&content)?,
        };
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_ron(content: &str) -> LoadResult<ContentTables> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse tables RON: {}", e))
    }

    pub fn from_toml(content: &str) -> LoadResult<ContentTables> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))
    }

    /// Renders tables as pretty RON, e.g. to seed a custom tables file.
    pub fn to_ron(tables: &ContentTables) -> LoadResult<String> {
        ron::ser::to_string_pretty(tables, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to render tables RON: {}", e))
    }
}
