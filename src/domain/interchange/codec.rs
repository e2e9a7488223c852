//! Delimited text codec for curriculum rows.
//!
//! Fields containing the delimiter, a quote or a line break are wrapped in
//! quotes with embedded quotes doubled. Decoding honours quoted spans across
//! line breaks, maps fields to columns by header position and fills short
//! records with empty strings.

use thiserror::Error;

use super::row::{CurriculumRow, HEADER};

const DELIMITER: char = ',';
const QUOTE: char = '"';
const BOM: char = '\u{feff}';

/// Fatal document errors. Any of these aborts an import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterchangeError {
    #[error("Document is empty: a header row is required")]
    EmptyDocument,

    #[error("Header is missing the required '{column}' column")]
    MissingColumn { column: &'static str },

    #[error("Quoted field starting on line {line} is never closed")]
    UnterminatedQuote { line: usize },
}

/// Renders rows as a document: header first, one record per row, each
/// record terminated by a newline.
pub fn encode(rows: &[CurriculumRow]) -> String {
    let mut out = String::new();
    write_record(&mut out, HEADER);
    for row in rows {
        write_record(&mut out, row.fields());
    }
    out
}

/// Parses a document produced by [`encode`] or edited by hand.
///
/// # Errors
///
/// - `EmptyDocument` when there is no non-blank header record
/// - `MissingColumn` when the header lacks `record_type` or `title`
/// - `UnterminatedQuote` when a quoted field runs to the end of input
pub fn decode(text: &str) -> Result<Vec<CurriculumRow>, InterchangeError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut records = tokenize(text)?.into_iter().filter(|r| !is_blank(r));

    let header: Vec<String> = records
        .next()
        .ok_or(InterchangeError::EmptyDocument)?
        .into_iter()
        .map(|name| name.trim().to_string())
        .collect();

    for required in ["record_type", "title"] {
        if !header.iter().any(|name| name == required) {
            return Err(InterchangeError::MissingColumn { column: required });
        }
    }

    Ok(records
        .map(|fields| {
            let mut fields = fields.into_iter();
            let mut row = CurriculumRow::default();
            for column in &header {
                row.set_column(column, fields.next().unwrap_or_default());
            }
            row
        })
        .collect())
}

fn write_record<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        if needs_quoting(field) {
            out.push(QUOTE);
            for c in field.chars() {
                if c == QUOTE {
                    out.push(QUOTE);
                }
                out.push(c);
            }
            out.push(QUOTE);
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

fn needs_quoting(field: &str) -> bool {
    field
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\n' || c == '\r')
}

fn is_blank(record: &[String]) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

/// Splits text into records of fields.
fn tokenize(text: &str) -> Result<Vec<Vec<String>>, InterchangeError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut quote_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                QUOTE if chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    field.push(QUOTE);
                }
                QUOTE => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            QUOTE => {
                in_quotes = true;
                quote_line = line;
            }
            DELIMITER => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut fields));
                line += 1;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(InterchangeError::UnterminatedQuote { line: quote_line });
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push(fields);
    }
    Ok(records)
}
