// src/export.rs
//! Serializers for an aggregated card set.
//!
//! All three outputs are pure functions of the same `&[Card]` snapshot:
//! - `to_aligned_text`: human-readable, column-aligned.
//! - `to_delimited_table`: one row per card, column keys as header.
//! - `to_filtered_projection`: `id|name` of every non-alternate-art row,
//!   derived from the delimited table text.
//!
//! `validate_delimiter` must pass before any of them is written.

use crate::config::consts::COLUMN_SEP;
use crate::csv::{parse_rows, rows_to_string};
use crate::data::{parse_bool, Card, CardField};
use crate::error::ExportError;

/// N cards → N + 2 lines: header, dashes, rows. Widths are counted in chars.
pub fn to_aligned_text(cards: &[Card], fields: &[CardField]) -> Vec<String> {
    let labels: Vec<String> = fields.iter().map(|f| f.label()).collect();

    let widths: Vec<usize> = fields
        .iter()
        .zip(&labels)
        .map(|(&f, label)| {
            cards
                .iter()
                .map(|c| c.get(f).chars().count())
                .fold(label.chars().count(), usize::max)
        })
        .collect();

    let header = pad_join(labels.iter().map(String::as_str), &widths);
    let separator = "-".repeat(header.chars().count());

    let mut lines = Vec::with_capacity(cards.len() + 2);
    lines.push(header);
    lines.push(separator);
    for card in cards {
        let values: Vec<_> = fields.iter().map(|&f| card.get(f)).collect();
        lines.push(pad_join(values.iter().map(|v| v.as_ref()), &widths));
    }
    lines
}

fn pad_join<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_SEP)
}

/// Header of column keys, then one row per card.
pub fn to_delimited_table(cards: &[Card], fields: &[CardField], delim: char) -> String {
    let header: Vec<String> = fields.iter().map(|f| s!(f.key())).collect();
    let rows: Vec<Vec<String>> = cards
        .iter()
        .map(|c| fields.iter().map(|&f| c.get(f).into_owned()).collect())
        .collect();
    rows_to_string(&header, &rows, delim)
}

/// `id|name` for every row whose `alternate_art` is not true.
pub fn to_filtered_projection(table: &str, delim: char) -> Result<String, ExportError> {
    let mut rows = parse_rows(table, delim).into_iter();
    let header = rows.next().unwrap_or_default();

    let columns: Vec<Option<CardField>> = header.iter().map(|h| CardField::from_key(h.trim())).collect();
    let col = |field: CardField| {
        columns
            .iter()
            .position(|&c| c == Some(field))
            .ok_or(ExportError::MissingColumn(field.key()))
    };
    let id = col(CardField::Id)?;
    let name = col(CardField::Name)?;
    let alt = col(CardField::AlternateArt)?;

    let kept: Vec<Vec<String>> = rows
        .filter(|row| !parse_bool(row.get(alt).map(String::as_str).unwrap_or("")))
        .map(|row| {
            let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
            vec![cell(id), cell(name)]
        })
        .collect();

    let out_header = [s!(CardField::Id.key()), s!(CardField::Name.key())];
    Ok(rows_to_string(&out_header, &kept, delim))
}

/// First card field containing `delim` is fatal: the delimited outputs would
/// otherwise be ambiguous to downstream readers.
pub fn validate_delimiter(cards: &[Card], delim: char) -> Result<(), ExportError> {
    for card in cards {
        if let Some(field) = CardField::ALL.into_iter().find(|&f| card.get(f).contains(delim)) {
            return Err(ExportError::DelimiterCollision {
                card_id: card.id.clone(),
                field: field.key(),
                delimiter: delim,
            });
        }
    }
    Ok(())
}
