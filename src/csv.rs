// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Parse link-list CSV text into rows of cells.
///
/// A leading UTF-8 BOM is dropped so the first header still reads `crseurl`
/// or `kiscourseid`. Lines that are completely empty produce no row; a line
/// of separators only (e.g. `,`) still does, with empty cells.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(row);
    }

    rows
}

/// Position of a header cell, compared after trimming.
pub fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer, quoting only where needed.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_fields_and_crlf() {
        let text = "\u{feff}crseurl,kiscourseid\r\n\"https://x/a,b\",K1\r\n\r\nhttps://y,\"say \"\"hi\"\"\"\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["crseurl", "kiscourseid"]);
        assert_eq!(rows[1], vec!["https://x/a,b", "K1"]);
        assert_eq!(rows[2], vec!["https://y", "say \"hi\""]);
    }

    #[test]
    fn separator_only_line_is_still_a_row() {
        let rows = parse_rows("crseurl,kiscourseid\n\n,\n", ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["", ""]);
    }

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "a,b", "he said \"no\"", ""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain,\"a,b\",\"he said \"\"no\"\"\",\n");
    }

    #[test]
    fn header_lookup_trims() {
        let headers = vec![s!(" kiscourseid"), s!("crseurl ")];
        assert_eq!(column_index(&headers, "crseurl"), Some(1));
        assert_eq!(column_index(&headers, "missing"), None);
    }
}
