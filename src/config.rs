use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{
    LayoutParser, ReferenceKind, locale::Locale, standard_reference, table::ExemplarTable,
    table::TableError,
};

/// Serializable description of a synthesis session.
///
/// Every field is optional when deserializing: the reference defaults to the
/// standard reference moment, the kind to `full` and the locale to the
/// invariant locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Reference moment as RFC 3339, e.g. `"2006-01-02T15:04:05-07:00"`
    pub reference: Option<DateTime<FixedOffset>>,
    pub kind:      ReferenceKind,
    /// Culture name understood by [`Locale::by_name`]
    pub locale:    String,
}

/// Error type for building a parser from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown locale: {0:?}")]
    UnknownLocale(String),

    #[error(transparent)]
    Table(#[from] TableError),
}

impl FactoryConfig {
    /// Resolves the locale and builds the exemplar table.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownLocale` for a locale without built-in data,
    /// or `ConfigError::Table` if the reference is ambiguous for the kind.
    pub fn build(&self) -> Result<LayoutParser, ConfigError> {
        let locale =
            Locale::by_name(&self.locale).ok_or_else(|| ConfigError::UnknownLocale(self.locale.clone()))?;
        let reference = self.reference.unwrap_or_else(standard_reference);
        let table = ExemplarTable::build(reference, self.kind, locale)?;
        Ok(LayoutParser::new(table))
    }
}
