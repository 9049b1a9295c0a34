//! Derive date/time format strings from example layouts.
//!
//! An example layout such as `"Jan-02-2006"` is written against a reference
//! moment. Every supported [`Specifier`] is rendered for that moment to give its
//! exemplar (`MMM` renders `"Jan"`, `dd` renders `"02"`, ...), and the layout is
//! scanned left to right for those exemplars, longest first:
//!
//! ```
//! use format_by_example::{Locale, build_table, standard_reference, synthesize, ReferenceKind};
//!
//! let table = build_table(standard_reference(), ReferenceKind::Full, Locale::EN_GB).unwrap();
//! assert_eq!(synthesize(&table, "Jan-02-2006"), "MMM-dd-yyyy");
//! assert_eq!(synthesize(&table, "3:04 pm"), "h:mm tt");
//! ```

mod config;
mod consts;
mod locale;
mod parser;
mod prelude;
mod render;
mod table;
mod types;

pub use config::{ConfigError, FactoryConfig};
pub use consts::*;
pub use locale::Locale;
pub use parser::{Chunk, Chunks, LayoutParser, synthesize};
pub use render::{CustomFormat, Render, RenderError, is_directive};
pub use table::{ExemplarTable, TableError};
pub use types::{ReferenceKind, Specifier, TokenError};

use chrono::{DateTime, FixedOffset, TimeZone};

/// Builds a moment with a fixed UTC offset given in seconds.
///
/// Returns `None` if any component is out of range.
pub fn moment(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    offset_seconds: i32,
) -> Option<DateTime<FixedOffset>> {
    FixedOffset::east_opt(offset_seconds)?
        .with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
}

/// The standard reference moment, Mon Jan 2 15:04:05 -07:00 2006.
///
/// Its exemplars are pairwise distinct for every built-in locale, which is
/// what makes it a good default.
///
/// # Panics
/// Never in practice: the `REFERENCE_*` constants name a valid calendar
/// moment and an offset within ±24h, so [`moment`] always returns `Some`.
/// `test_standard_reference` pins every component.
#[allow(clippy::expect_used)]
pub fn standard_reference() -> DateTime<FixedOffset> {
    moment(
        REFERENCE_YEAR,
        REFERENCE_MONTH,
        REFERENCE_DAY,
        REFERENCE_HOUR,
        REFERENCE_MINUTE,
        REFERENCE_SECOND,
        REFERENCE_OFFSET_SECONDS,
    )
    .expect("standard reference components are in range")
}

/// Renders `reference` under every specifier applicable to `kind` and indexes
/// the results.
///
/// # Errors
/// Returns `TableError::AmbiguousReference` if two specifiers render the
/// reference identically. Supplying a different reference, or a narrower kind
/// when the clash is between a date and a time specifier, resolves it.
pub fn build_table(
    reference: DateTime<FixedOffset>,
    kind: ReferenceKind,
    locale: Locale,
) -> Result<ExemplarTable, TableError> {
    ExemplarTable::build(reference, kind, locale)
}
