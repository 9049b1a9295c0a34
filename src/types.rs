use crate::consts::ESCAPE_MARKER;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A custom date/time format specifier that layouts can be matched against.
///
/// The set is closed: every variant renders one component of a moment and is
/// written in a format string as its canonical token (see [`Specifier::token`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specifier {
    /// `d`: day of month, 1-31
    Day,
    /// `dd`: day of month, 01-31
    DayPadded,
    /// `ddd`: abbreviated day name
    DayNameShort,
    /// `dddd`: full day name
    DayName,
    /// `g`: era
    Era,
    /// `h`: hour on a 12-hour clock, 1-12
    Hour12,
    /// `hh`: hour on a 12-hour clock, 01-12
    Hour12Padded,
    /// `HH`: hour on a 24-hour clock, 00-23
    Hour24Padded,
    /// `m`: minute, 0-59
    Minute,
    /// `mm`: minute, 00-59
    MinutePadded,
    /// `M`: month, 1-12
    Month,
    /// `MM`: month, 01-12
    MonthPadded,
    /// `MMM`: abbreviated month name
    MonthNameShort,
    /// `MMMM`: full month name
    MonthName,
    /// `s`: second, 0-59
    Second,
    /// `ss`: second, 00-59
    SecondPadded,
    /// `t`: first letter of the AM/PM designator
    AmPmShort,
    /// `tt`: AM/PM designator
    AmPm,
    /// `y`: year of the century, 0-99
    Year,
    /// `yy`: year of the century, 00-99
    YearTwoDigit,
    /// `yyyy`: year, at least four digits
    YearFull,
    /// `z`: hours of the UTC offset, no padding
    Offset,
    /// `zz`: hours of the UTC offset, 2 digits
    OffsetPadded,
    /// `zzz`: hours and minutes of the UTC offset
    OffsetFull,
}

/// Which parts of a reference moment are meaningful.
///
/// Narrowing the kind drops the specifiers of the other half, so a reference
/// whose date is a placeholder (e.g. `1900-01-01`) can still anchor time layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceKind {
    #[default]
    #[display(fmt = "full")]
    Full,
    #[display(fmt = "date-only")]
    DateOnly,
    #[display(fmt = "time-only")]
    TimeOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TokenError {
    #[display(fmt = "Unknown specifier token: {_0:?}")]
    UnknownSpecifier(String),
    #[display(fmt = "Unknown reference kind: {_0:?} (expected full, date-only or time-only)")]
    UnknownReferenceKind(String),
}

impl std::error::Error for TokenError {}

const FULL: [Specifier; 24] = [
    Specifier::Day,
    Specifier::DayPadded,
    Specifier::DayNameShort,
    Specifier::DayName,
    Specifier::Era,
    Specifier::Hour12,
    Specifier::Hour12Padded,
    Specifier::Hour24Padded,
    Specifier::Minute,
    Specifier::MinutePadded,
    Specifier::Month,
    Specifier::MonthPadded,
    Specifier::MonthNameShort,
    Specifier::MonthName,
    Specifier::Second,
    Specifier::SecondPadded,
    Specifier::AmPmShort,
    Specifier::AmPm,
    Specifier::Year,
    Specifier::YearTwoDigit,
    Specifier::YearFull,
    Specifier::Offset,
    Specifier::OffsetPadded,
    Specifier::OffsetFull,
];

const DATE_ONLY: [Specifier; 12] = [
    Specifier::Day,
    Specifier::DayPadded,
    Specifier::DayNameShort,
    Specifier::DayName,
    Specifier::Era,
    Specifier::Month,
    Specifier::MonthPadded,
    Specifier::MonthNameShort,
    Specifier::MonthName,
    Specifier::Year,
    Specifier::YearTwoDigit,
    Specifier::YearFull,
];

const TIME_ONLY: [Specifier; 9] = [
    Specifier::Hour12,
    Specifier::Hour12Padded,
    Specifier::Hour24Padded,
    Specifier::Minute,
    Specifier::MinutePadded,
    Specifier::Second,
    Specifier::SecondPadded,
    Specifier::AmPmShort,
    Specifier::AmPm,
];

impl Specifier {
    /// Every specifier, in table enumeration order
    pub const ALL: &'static [Self] = &FULL;

    /// Returns the canonical token written into format strings
    pub const fn token(self) -> &'static str {
        match self {
            Self::Day => "d",
            Self::DayPadded => "dd",
            Self::DayNameShort => "ddd",
            Self::DayName => "dddd",
            Self::Era => "g",
            Self::Hour12 => "h",
            Self::Hour12Padded => "hh",
            Self::Hour24Padded => "HH",
            Self::Minute => "m",
            Self::MinutePadded => "mm",
            Self::Month => "M",
            Self::MonthPadded => "MM",
            Self::MonthNameShort => "MMM",
            Self::MonthName => "MMMM",
            Self::Second => "s",
            Self::SecondPadded => "ss",
            Self::AmPmShort => "t",
            Self::AmPm => "tt",
            Self::Year => "y",
            Self::YearTwoDigit => "yy",
            Self::YearFull => "yyyy",
            Self::Offset => "z",
            Self::OffsetPadded => "zz",
            Self::OffsetFull => "zzz",
        }
    }

    /// Returns the format string that renders this specifier on its own.
    ///
    /// A lone character is read by the format grammar as a standard format,
    /// so single-character tokens are prefixed with [`ESCAPE_MARKER`].
    pub fn standalone_format(self) -> String {
        let token = self.token();
        if token.len() == 1 {
            format!("{ESCAPE_MARKER}{token}")
        } else {
            token.to_owned()
        }
    }

    /// Specifiers applicable to a reference of the given kind
    pub const fn for_kind(kind: ReferenceKind) -> &'static [Self] {
        match kind {
            ReferenceKind::Full => &FULL,
            ReferenceKind::DateOnly => &DATE_ONLY,
            ReferenceKind::TimeOnly => &TIME_ONLY,
        }
    }

    /// Looks a specifier up by its canonical token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|sp| sp.token() == token)
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Specifier {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| TokenError::UnknownSpecifier(s.to_owned()))
    }
}

impl Serialize for Specifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Specifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl ReferenceKind {
    /// Specifiers applicable to this kind
    pub const fn specifiers(self) -> &'static [Specifier] {
        Specifier::for_kind(self)
    }
}

impl FromStr for ReferenceKind {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "full" => Ok(Self::Full),
            "date-only" | "dateonly" | "date" => Ok(Self::DateOnly),
            "time-only" | "timeonly" | "time" => Ok(Self::TimeOnly),
            _ => Err(TokenError::UnknownReferenceKind(s.to_owned())),
        }
    }
}
