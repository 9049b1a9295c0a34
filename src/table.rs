use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use crate::{
    Specifier,
    locale::Locale,
    render::{CustomFormat, Render, RenderError},
    types::ReferenceKind,
};

/// Exemplars of one reference moment: what each applicable specifier renders to.
///
/// Built once and read-only afterwards. Every exemplar maps to exactly one
/// specifier, and exemplars can be walked longest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExemplarTable {
    reference:  DateTime<FixedOffset>,
    kind:       ReferenceKind,
    locale:     Locale,
    exemplars:  HashMap<String, Specifier>,
    /// Exemplar keys by decreasing length, ties in enumeration order
    by_length:  Vec<(String, Specifier)>,
}

/// Error type for exemplar table construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Two specifiers render the reference identically.
    #[error(
        "Ambiguous reference time - the specifiers \"{first}\" and \"{second}\" both produce \"{exemplar}\""
    )]
    AmbiguousReference {
        first:    Specifier,
        second:   Specifier,
        exemplar: String,
    },

    /// The renderer rejected a specifier's format.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ExemplarTable {
    /// Builds the table with the built-in [`CustomFormat`] renderer.
    ///
    /// # Errors
    /// Returns `TableError::AmbiguousReference` if two specifiers applicable
    /// to `kind` render `reference` to the same string.
    pub fn build(
        reference: DateTime<FixedOffset>,
        kind: ReferenceKind,
        locale: Locale,
    ) -> Result<Self, TableError> {
        Self::build_with(&CustomFormat, reference, kind, locale)
    }

    /// Builds the table, rendering exemplars through `renderer`.
    ///
    /// # Errors
    /// Returns `TableError::AmbiguousReference` on a duplicate exemplar, or
    /// `TableError::Render` if the renderer rejects a specifier.
    pub fn build_with<R: Render + ?Sized>(
        renderer: &R,
        reference: DateTime<FixedOffset>,
        kind: ReferenceKind,
        locale: Locale,
    ) -> Result<Self, TableError> {
        let specifiers = Specifier::for_kind(kind);
        let mut exemplars = HashMap::with_capacity(specifiers.len());
        let mut by_length = Vec::with_capacity(specifiers.len());

        for &specifier in specifiers {
            let exemplar = renderer.render(&reference, &specifier.standalone_format(), &locale)?;

            if let Some(&first) = exemplars.get(&exemplar) {
                return Err(TableError::AmbiguousReference {
                    first,
                    second: specifier,
                    exemplar,
                });
            }

            exemplars.insert(exemplar.clone(), specifier);
            by_length.push((exemplar, specifier));
        }

        // Stable sort keeps enumeration order among equal lengths
        by_length.sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));

        log::debug!(
            "built exemplar table: reference={reference}, kind={kind}, locale={:?}, entries={}",
            locale.name(),
            by_length.len()
        );

        Ok(Self {
            reference,
            kind,
            locale,
            exemplars,
            by_length,
        })
    }

    pub const fn reference(&self) -> &DateTime<FixedOffset> {
        &self.reference
    }

    pub const fn kind(&self) -> ReferenceKind {
        self.kind
    }

    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the specifier an exemplar belongs to
    pub fn specifier_of(&self, exemplar: &str) -> Option<Specifier> {
        self.exemplars.get(exemplar).copied()
    }

    /// Returns the exemplar a specifier renders to, if it applies to this table's kind
    pub fn exemplar_of(&self, specifier: Specifier) -> Option<&str> {
        self.by_length
            .iter()
            .find(|(_, sp)| *sp == specifier)
            .map(|(ex, _)| ex.as_str())
    }

    /// Specifiers present in the table, in enumeration order
    pub fn specifiers(&self) -> impl Iterator<Item = Specifier> + '_ {
        Specifier::for_kind(self.kind)
            .iter()
            .copied()
            .filter(|sp| self.exemplar_of(*sp).is_some())
    }

    /// Exemplars with their specifiers, longest exemplar first
    pub fn by_decreasing_length(&self) -> impl Iterator<Item = (&str, Specifier)> + '_ {
        self.by_length.iter().map(|(ex, sp)| (ex.as_str(), *sp))
    }

    /// Longest exemplar that `text` starts with.
    /// Empty exemplars never match, they would not advance a scan.
    pub(crate) fn longest_prefix_match(&self, text: &str) -> Option<(&str, Specifier)> {
        self.by_decreasing_length()
            .find(|(exemplar, _)| !exemplar.is_empty() && text.starts_with(exemplar))
    }

    pub fn len(&self) -> usize {
        self.by_length.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}
