// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal delimited-text parser (quotes + CRLF tolerant). Blank lines are
/// dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
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
                flush_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline, even if quotes were unterminated.
    row.push(field);
    flush_row(&mut rows, &mut row);

    rows
}

fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.len() == 1 && row[0].is_empty() {
        row.clear();
    } else {
        rows.push(take(row));
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single delimited row to any writer.
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

/// Header plus rows as one string, every line newline-terminated.
pub fn rows_to_string<S: AsRef<str>>(header: &[S], rows: &[Vec<S>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    // Writing into a Vec can't fail.
    let _ = write_row(&mut buf, header, sep);
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "a|b", "say \"hi\""], '|').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain|\"a|b\"|\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn parses_quoted_fields_and_crlf() {
        let rows = parse_rows("id|name\r\n\"a|b\"|\"x\"\"y\"\r\n", '|');
        assert_eq!(rows, vec![vec!["id", "name"], vec!["a|b", "x\"y"]]);
    }

    #[test]
    fn trailing_newline_adds_no_empty_row() {
        assert_eq!(parse_rows("a|b\n", '|').len(), 1);
        assert_eq!(parse_rows("a|b\n\nc|d", '|').len(), 2);
        assert!(parse_rows("", '|').is_empty());
    }

    #[test]
    fn keeps_empty_cells() {
        assert_eq!(parse_rows("a||c\n", '|'), vec![vec!["a", "", "c"]]);
    }
}
