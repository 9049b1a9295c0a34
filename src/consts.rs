/// Year of the standard reference moment
pub const REFERENCE_YEAR: i32 = 2006;
/// Month of the standard reference moment (January)
pub const REFERENCE_MONTH: u32 = 1;
/// Day of the standard reference moment (a Monday)
pub const REFERENCE_DAY: u32 = 2;
/// Hour (24-hour clock) of the standard reference moment
pub const REFERENCE_HOUR: u32 = 15;
/// Minute of the standard reference moment
pub const REFERENCE_MINUTE: u32 = 4;
/// Second of the standard reference moment
pub const REFERENCE_SECOND: u32 = 5;
/// UTC offset of the standard reference moment, in seconds (-07:00)
pub const REFERENCE_OFFSET_SECONDS: i32 = -7 * SECONDS_PER_HOUR;

pub(crate) const SECONDS_PER_HOUR: i32 = 3600;
pub(crate) const SECONDS_PER_MINUTE: i32 = 60;

/// Prefix that forces a lone character to be read as a custom specifier
pub const ESCAPE_MARKER: char = '%';
/// Delimiter of a verbatim literal span
pub const QUOTE: char = '"';
/// Alternate delimiter of a verbatim literal span
pub const SINGLE_QUOTE: char = '\'';
/// Escapes the following character, inside or outside a quoted span
pub const BACKSLASH: char = '\\';

/// Placeholder in a format string for the locale's time separator
pub const TIME_SEPARATOR: char = ':';
/// Placeholder in a format string for the locale's date separator
pub const DATE_SEPARATOR: char = '/';

/// Letters the custom format grammar treats as directives.
/// Includes directives (fractions, `K`) that are never synthesized but would
/// still be misread inside an unquoted literal.
pub const DIRECTIVE_LETTERS: [char; 13] = [
    'd', 'f', 'F', 'g', 'h', 'H', 'K', 'm', 'M', 's', 't', 'y', 'z',
];
