use crate::{
    Specifier,
    consts::{BACKSLASH, DATE_SEPARATOR, ESCAPE_MARKER, QUOTE, SINGLE_QUOTE, TIME_SEPARATOR},
    locale::Locale,
    render::is_directive,
    standard_reference,
    table::{ExemplarTable, TableError},
    types::ReferenceKind,
};

/// One scan step over a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Text before the matched exemplar, possibly empty
    pub literal:   &'a str,
    /// Specifier of the matched exemplar, `None` when nothing in the remainder matched
    pub specifier: Option<Specifier>,
    /// Unconsumed remainder of the layout
    pub rest:      &'a str,
}

/// Lazy iterator over the chunks of a layout, see [`LayoutParser::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks<'t, 'a> {
    table:     &'t ExemplarTable,
    remaining: &'a str,
}

impl<'a> Iterator for Chunks<'_, 'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let layout = self.remaining;

        // Leftmost offset wins, then the longest exemplar at that offset
        let chunk = layout
            .char_indices()
            .find_map(|(offset, _)| {
                self.table
                    .longest_prefix_match(&layout[offset..])
                    .map(|(exemplar, specifier)| Chunk {
                        literal:   &layout[..offset],
                        specifier: Some(specifier),
                        rest:      &layout[offset + exemplar.len()..],
                    })
            })
            .unwrap_or(Chunk {
                literal:   layout,
                specifier: None,
                rest:      "",
            });

        self.remaining = chunk.rest;
        Some(chunk)
    }
}

/// Derives format strings from example layouts of a reference moment.
///
/// # Examples
/// ```
/// use format_by_example::{ExemplarTable, LayoutParser, Locale, ReferenceKind, standard_reference};
///
/// let table = ExemplarTable::build(standard_reference(), ReferenceKind::Full, Locale::EN_GB).unwrap();
/// let parser = LayoutParser::new(table);
///
/// assert_eq!(parser.synthesize("Jan-02-2006"), "MMM-dd-yyyy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutParser {
    table: ExemplarTable,
}

impl LayoutParser {
    pub const fn new(table: ExemplarTable) -> Self {
        Self { table }
    }

    /// Parser over the standard reference moment, full kind, in `locale`
    ///
    /// # Errors
    /// Returns `TableError` if the locale's names make the standard reference ambiguous.
    pub fn standard(locale: Locale) -> Result<Self, TableError> {
        ExemplarTable::build(standard_reference(), ReferenceKind::Full, locale).map(Self::new)
    }

    pub const fn table(&self) -> &ExemplarTable {
        &self.table
    }

    /// Splits `layout` into literal text and matched specifiers, left to right
    pub fn chunks<'a>(&self, layout: &'a str) -> Chunks<'_, 'a> {
        Chunks {
            table:     &self.table,
            remaining: layout,
        }
    }

    /// Returns a format string that renders the reference moment as `layout`.
    ///
    /// Never fails: text that matches no exemplar is kept as a literal, quoted
    /// when the format grammar would otherwise read it as directives.
    pub fn synthesize(&self, layout: &str) -> String {
        synthesize(&self.table, layout)
    }
}

impl From<ExemplarTable> for LayoutParser {
    fn from(table: ExemplarTable) -> Self {
        Self::new(table)
    }
}

/// Synthesizes a format string for `layout` from the exemplars in `table`.
pub fn synthesize(table: &ExemplarTable, layout: &str) -> String {
    let locale = table.locale();
    let mut format = String::with_capacity(layout.len() + 2);

    let chunks = Chunks {
        table,
        remaining: layout,
    };
    for chunk in chunks {
        log::trace!("chunk: literal={:?}, specifier={:?}", chunk.literal, chunk.specifier);

        if needs_quoting(chunk.literal, locale) {
            push_quoted(&mut format, chunk.literal);
        } else {
            format.push_str(chunk.literal);
        }
        if let Some(specifier) = chunk.specifier {
            format.push_str(specifier.token());
        }
    }

    // A one character format would be read as a standard format name
    let mut chars = format.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        format.clear();
        if is_directive(only) {
            format.push(ESCAPE_MARKER);
            format.push(only);
        } else {
            push_quoted(&mut format, &only.to_string());
        }
    }

    format
}

/// Whether `literal` contains text the format grammar would not render verbatim
fn needs_quoting(literal: &str, locale: &Locale) -> bool {
    literal.chars().any(|c| match c {
        ESCAPE_MARKER | QUOTE | SINGLE_QUOTE | BACKSLASH => true,
        TIME_SEPARATOR => locale.time_separator() != ":",
        DATE_SEPARATOR => locale.date_separator() != "/",
        other => is_directive(other),
    })
}

fn push_quoted(format: &mut String, literal: &str) {
    format.push(QUOTE);
    for c in literal.chars() {
        if c == QUOTE || c == BACKSLASH {
            format.push(BACKSLASH);
        }
        format.push(c);
    }
    format.push(QUOTE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        moment,
        render::{CustomFormat, Render},
    };

    fn gb_parser() -> LayoutParser {
        LayoutParser::standard(Locale::EN_GB).unwrap()
    }

    fn render_gb(format: &str) -> String {
        CustomFormat
            .render(&standard_reference(), format, &Locale::EN_GB)
            .unwrap()
    }

    #[test]
    fn test_synthesize_cases() {
        struct TestCase {
            layout:   &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                layout:   "Mon Jan 2 15:04:05 -07:00 2006",
                expected: "ddd MMM d HH:mm:ss zzz yyyy",
            },
            TestCase {
                layout:   "2006-01-02",
                expected: "yyyy-MM-dd",
            },
            TestCase {
                layout:   "20060102",
                expected: "yyyyMMdd",
            },
            TestCase {
                layout:   "January 02, 2006",
                expected: "MMMM dd, yyyy",
            },
            TestCase {
                layout:   "02 January 2006",
                expected: "dd MMMM yyyy",
            },
            TestCase {
                layout:   "02-Jan-2006",
                expected: "dd-MMM-yyyy",
            },
            TestCase {
                layout:   "01/02/06",
                expected: "MM/dd/yy",
            },
            TestCase {
                layout:   "01/02/2006",
                expected: "MM/dd/yyyy",
            },
            TestCase {
                layout:   "010206",
                expected: "MMddyy",
            },
            TestCase {
                layout:   "Jan-02-06",
                expected: "MMM-dd-yy",
            },
            TestCase {
                layout:   "Jan-02-2006",
                expected: "MMM-dd-yyyy",
            },
            TestCase {
                layout:   "06",
                expected: "yy",
            },
            TestCase {
                layout:   "Mon",
                expected: "ddd",
            },
            TestCase {
                layout:   "Monday",
                expected: "dddd",
            },
            TestCase {
                layout:   "Jan-06",
                expected: "MMM-yy",
            },
            TestCase {
                layout:   "15:04",
                expected: "HH:mm",
            },
            TestCase {
                layout:   "15:04:05",
                expected: "HH:mm:ss",
            },
            TestCase {
                layout:   "3:04 pm",
                expected: "h:mm tt",
            },
            TestCase {
                layout:   "03:04:05 pm",
                expected: "hh:mm:ss tt",
            },
            TestCase {
                layout:   "2006-01-02T15:04:05",
                expected: "yyyy-MM-ddTHH:mm:ss",
            },
            TestCase {
                layout:   "2006-01-02T15:04:05-07",
                expected: "yyyy-MM-ddTHH:mm:sszz",
            },
            TestCase {
                layout:   "2 Jan 2006 15:04:05",
                expected: "d MMM yyyy HH:mm:ss",
            },
            TestCase {
                layout:   "2 Jan 2006 15:04",
                expected: "d MMM yyyy HH:mm",
            },
            TestCase {
                layout:   "  foo Bar Mon BAZ, 2 Jan 2006 15:04:05 BUZZ!  ",
                expected: "\"  foo Bar \"ddd BAZ, d MMM yyyy HH:mm:ss BUZZ!  ",
            },
            TestCase {
                layout:   " BUZZ!  ",
                expected: " BUZZ!  ",
            },
            TestCase {
                layout:   "MMMM Mon ddd Mon ddd",
                expected: "\"MMMM \"ddd\" ddd \"ddd\" ddd\"",
            },
            TestCase {
                layout:   "MMMM",
                expected: "\"MMMM\"",
            },
            TestCase {
                layout:   "X",
                expected: "\"X\"",
            },
            TestCase {
                layout:   "XXX",
                expected: "XXX",
            },
        ];

        let parser = gb_parser();
        for case in &cases {
            let format = parser.synthesize(case.layout);
            assert_eq!(format, case.expected, "synthesizing {:?}", case.layout);
            assert_eq!(render_gb(&format), case.layout, "rendering {:?}", format);
        }
    }

    #[test]
    fn test_single_letter_format_is_escaped() {
        let parser = gb_parser();
        assert_eq!(parser.synthesize("1"), "%M");
        assert_eq!(parser.synthesize("p"), "%t");
        assert_eq!(render_gb("%M"), "1");
    }

    #[test]
    fn test_adjacent_runs_of_one_letter_merge() {
        struct TestCase {
            layout:   &'static str,
            expected: &'static str,
            rendered: &'static str,
        }

        // Matches are concatenated without a separator, so equal letters
        // fuse into a different token and the layout does not come back
        let cases = [
            TestCase {
                layout:   "11",
                expected: "MM",
                rendered: "01",
            },
            TestCase {
                layout:   "pmpm",
                expected: "tttt",
                rendered: "pm",
            },
            TestCase {
                layout:   "202",
                expected: "ddd",
                rendered: "Mon",
            },
        ];

        let parser = gb_parser();
        for case in &cases {
            let format = parser.synthesize(case.layout);
            assert_eq!(format, case.expected, "synthesizing {:?}", case.layout);
            assert_eq!(render_gb(&format), case.rendered, "rendering {:?}", format);
        }
    }

    #[test]
    fn test_empty_layout() {
        assert_eq!(gb_parser().synthesize(""), "");
    }

    #[test]
    fn test_pure_literal_is_single_chunk() {
        let parser = gb_parser();
        let chunks: Vec<_> = parser.chunks("XYZ!").collect();
        assert_eq!(
            chunks,
            vec![Chunk {
                literal:   "XYZ!",
                specifier: None,
                rest:      "",
            }]
        );
        assert_eq!(parser.synthesize("Hello"), "\"Hello\"");
        assert_eq!(render_gb("\"Hello\""), "Hello");
    }

    #[test]
    fn test_month_name_text_alone_is_quoted() {
        let parser = gb_parser();
        // A full month name that is not the reference month's
        let format = parser.synthesize("March");
        assert_eq!(format, "\"March\"");
        assert_eq!(render_gb(&format), "March");
    }

    #[test]
    fn test_chunks() {
        let parser = gb_parser();
        let chunks: Vec<_> = parser
            .chunks("at 3:04 pm")
            .map(|c| (c.literal, c.specifier))
            .collect();
        assert_eq!(
            chunks,
            vec![
                ("at ", Some(Specifier::Hour12)),
                (":", Some(Specifier::MinutePadded)),
                (" ", Some(Specifier::AmPm)),
            ]
        );
        assert_eq!(parser.synthesize("at 3:04 pm"), "\"at \"h:mm tt");
    }

    #[test]
    fn test_leftmost_offset_beats_longer_match() {
        let parser = gb_parser();
        // "5" at offset 0 wins over "2006" starting at offset 1
        let mut chunks = parser.chunks("52006");
        let first = chunks.next().unwrap();
        assert_eq!(first.literal, "");
        assert_eq!(first.specifier, Some(Specifier::Second));
        assert_eq!(first.rest, "2006");
        assert_eq!(chunks.next().unwrap().specifier, Some(Specifier::YearFull));
        assert!(chunks.next().is_none());
    }

    #[test]
    fn test_metacharacters_are_escaped_in_quotes() {
        let parser = gb_parser();
        let layout = "2006 \"ok%\" \\o/";
        let format = parser.synthesize(layout);
        assert_eq!(format, "yyyy\" \\\"ok%\\\" \\\\o/\"");
        assert_eq!(render_gb(&format), layout);
    }

    #[test]
    fn test_time_only_reference() {
        let reference = moment(1900, 1, 1, 13, 5, 6, 0).unwrap();
        let table = ExemplarTable::build(reference, ReferenceKind::TimeOnly, Locale::EN_GB).unwrap();
        assert_eq!(synthesize(&table, "1:05 pm"), "h:mm tt");
    }

    #[test]
    fn test_date_only_reference() {
        let reference = moment(2006, 1, 2, 0, 0, 0, 0).unwrap();
        let table = ExemplarTable::build(reference, ReferenceKind::DateOnly, Locale::EN_GB).unwrap();
        assert_eq!(synthesize(&table, "Jan-02-06"), "MMM-dd-yy");
    }

    #[test]
    fn test_offset_with_minutes() {
        struct TestCase {
            layout:   &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                layout:   "2006-01-02T15:04:05-07",
                expected: "yyyy-MM-ddTHH:mm:sszz",
            },
            TestCase {
                layout:   "Jan-02-06",
                expected: "MMM-dd-yy",
            },
            TestCase {
                layout:   "Jan-06",
                expected: "MMM-yy",
            },
            TestCase {
                layout:   "Mon Jan 2 15:04:05 -07:38 2006",
                expected: "ddd MMM d HH:mm:ss zzz yyyy",
            },
        ];

        let reference = moment(2006, 1, 2, 15, 4, 5, -(7 * 3600 + 38 * 60)).unwrap();
        let table = ExemplarTable::build(reference, ReferenceKind::Full, Locale::EN_GB).unwrap();
        for case in &cases {
            assert_eq!(synthesize(&table, case.layout), case.expected, "synthesizing {:?}", case.layout);
        }
    }

    #[test]
    fn test_french_names() {
        let table = ExemplarTable::build(standard_reference(), ReferenceKind::Full, Locale::FR_FR).unwrap();
        let format = synthesize(&table, "lundi janvier");
        assert_eq!(format, "dddd MMMM");
        assert_eq!(
            CustomFormat
                .render(&standard_reference(), &format, &Locale::FR_FR)
                .unwrap(),
            "lundi janvier"
        );
    }

    #[test]
    fn test_needs_quoting() {
        let gb = Locale::EN_GB;
        assert!(!needs_quoting("", &gb));
        assert!(!needs_quoting(" - ", &gb));
        assert!(!needs_quoting(":/", &gb));
        assert!(needs_quoting("of", &gb));
        assert!(needs_quoting("50%", &gb));
        assert!(needs_quoting("'", &gb));
    }
}
