//! Rendering a moment under a custom date/time format string.
//!
//! The grammar is the one synthesized formats are written in:
//!
//! * runs of a directive letter (`yyyy`, `MMM`, `d`, ...) render a component,
//! * `%` before a lone letter forces it to be read as a custom directive,
//! * `"..."` and `'...'` render their contents verbatim,
//! * `\` renders the next character verbatim,
//! * `:` and `/` render the locale's time and date separators,
//! * anything else renders as itself.
//!
//! A format that is exactly one character long is a standard format name,
//! which this renderer does not implement.

use crate::consts::{
    BACKSLASH, DATE_SEPARATOR, DIRECTIVE_LETTERS, ESCAPE_MARKER, QUOTE, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE, SINGLE_QUOTE, TIME_SEPARATOR,
};
use crate::locale::Locale;
use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use std::fmt::Write;

/// Most fractional-second digits a directive may ask for
const MAX_FRACTION_DIGITS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A single character format names a standard format.
    #[error("Standard format {0:?} is not supported; escape it as \"%{0}\" for the custom specifier")]
    StandardFormat(char),

    /// A quoted span has no closing quote.
    #[error("Unterminated quoted literal starting at byte {0}")]
    UnterminatedQuote(usize),

    /// An escape character ends the format.
    #[error("Format ends with a dangling {0:?}")]
    TrailingEscape(char),

    /// Writing the rendered text failed.
    #[error("Failed to write rendered text")]
    Write(#[from] std::fmt::Error),
}

/// Renders a moment under a format string for a locale.
pub trait Render {
    /// # Errors
    /// Returns `RenderError` if `format` is not valid in the renderer's grammar.
    fn render(
        &self,
        moment: &DateTime<FixedOffset>,
        format: &str,
        locale: &Locale,
    ) -> Result<String, RenderError>;
}

/// Renderer for the custom date/time format grammar described in the module docs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomFormat;

/// Whether the grammar reads `c` as (the start of) a directive
pub fn is_directive(c: char) -> bool {
    DIRECTIVE_LETTERS.contains(&c)
}

impl Render for CustomFormat {
    fn render(
        &self,
        moment: &DateTime<FixedOffset>,
        format: &str,
        locale: &Locale,
    ) -> Result<String, RenderError> {
        let mut chars = format.chars();
        if let (Some(only), None) = (chars.next(), chars.next()) {
            return Err(RenderError::StandardFormat(only));
        }

        let mut out = String::with_capacity(format.len() * 2);
        let mut rest = format.char_indices().peekable();

        while let Some((pos, c)) = rest.next() {
            match c {
                ESCAPE_MARKER => match rest.next() {
                    Some((_, next)) if is_directive(next) => directive(&mut out, moment, locale, next, 1)?,
                    Some((_, next)) => out.push(next),
                    None => return Err(RenderError::TrailingEscape(ESCAPE_MARKER)),
                },
                QUOTE | SINGLE_QUOTE => {
                    let mut closed = false;
                    while let Some((_, q)) = rest.next() {
                        if q == c {
                            closed = true;
                            break;
                        }
                        if q == BACKSLASH {
                            match rest.next() {
                                Some((_, escaped)) => out.push(escaped),
                                None => return Err(RenderError::TrailingEscape(BACKSLASH)),
                            }
                        } else {
                            out.push(q);
                        }
                    }
                    if !closed {
                        return Err(RenderError::UnterminatedQuote(pos));
                    }
                },
                BACKSLASH => match rest.next() {
                    Some((_, escaped)) => out.push(escaped),
                    None => return Err(RenderError::TrailingEscape(BACKSLASH)),
                },
                TIME_SEPARATOR => out.push_str(locale.time_separator()),
                DATE_SEPARATOR => out.push_str(locale.date_separator()),
                letter if is_directive(letter) => {
                    let mut run = 1;
                    while rest.next_if(|&(_, next)| next == letter).is_some() {
                        run += 1;
                    }
                    directive(&mut out, moment, locale, letter, run)?;
                },
                other => out.push(other),
            }
        }

        Ok(out)
    }
}

/// Appends the rendering of a run of `run` copies of `letter`.
/// Letters that are not directives append nothing.
fn directive(
    out: &mut String,
    moment: &DateTime<FixedOffset>,
    locale: &Locale,
    letter: char,
    run: usize,
) -> std::fmt::Result {
    match letter {
        'd' => match run {
            1 => write!(out, "{}", moment.day()),
            2 => write!(out, "{:02}", moment.day()),
            3 => write!(out, "{}", locale.day_name_short(moment.weekday().num_days_from_sunday())),
            _ => write!(out, "{}", locale.day_name(moment.weekday().num_days_from_sunday())),
        },
        'f' | 'F' => {
            let digits = run.min(MAX_FRACTION_DIGITS);
            let scaled = moment.nanosecond() % 1_000_000_000 / 10u32.pow(9 - digits as u32);
            let mut fraction = format!("{scaled:0digits$}");
            if letter == 'F' {
                fraction.truncate(fraction.trim_end_matches('0').len());
            }
            write!(out, "{fraction}")
        },
        'g' => write!(out, "{}", locale.era_name()),
        'h' => {
            let (_, hour) = moment.hour12();
            if run == 1 {
                write!(out, "{hour}")
            } else {
                write!(out, "{hour:02}")
            }
        },
        'H' => {
            if run == 1 {
                write!(out, "{}", moment.hour())
            } else {
                write!(out, "{:02}", moment.hour())
            }
        },
        'K' => offset(out, moment, 3),
        'm' => {
            if run == 1 {
                write!(out, "{}", moment.minute())
            } else {
                write!(out, "{:02}", moment.minute())
            }
        },
        'M' => match run {
            1 => write!(out, "{}", moment.month()),
            2 => write!(out, "{:02}", moment.month()),
            3 => write!(out, "{}", locale.month_name_short(moment.month())),
            _ => write!(out, "{}", locale.month_name(moment.month())),
        },
        's' => {
            if run == 1 {
                write!(out, "{}", moment.second())
            } else {
                write!(out, "{:02}", moment.second())
            }
        },
        't' => {
            let designator = locale.designator(moment.hour());
            if run == 1 {
                write!(out, "{}", designator.chars().next().map(String::from).unwrap_or_default())
            } else {
                write!(out, "{designator}")
            }
        },
        'y' => {
            let year = moment.year();
            match run {
                1 => write!(out, "{}", year.rem_euclid(100)),
                2 => write!(out, "{:02}", year.rem_euclid(100)),
                width => write!(out, "{year:0width$}"),
            }
        },
        'z' => offset(out, moment, run),
        _ => Ok(()),
    }
}

fn offset(out: &mut String, moment: &DateTime<FixedOffset>, run: usize) -> std::fmt::Result {
    let seconds = moment.offset().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let hours = seconds.abs() / SECONDS_PER_HOUR;
    let minutes = seconds.abs() % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    match run {
        1 => write!(out, "{sign}{hours}"),
        2 => write!(out, "{sign}{hours:02}"),
        _ => write!(out, "{sign}{hours:02}:{minutes:02}"),
    }
}
