// src/data.rs
//
// Canonical record types.
//
// - Series: one listing of the catalog (id + cleaned display name).
// - Card:   one extracted card. Built through CardBuilder, never mutated after.
// - CardField: column schema shared by every export format.

use std::borrow::Cow;

/// One catalog partition as offered by the series selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series {
    pub id: String,
    pub name: String,
}

impl Series {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub rarity: String,
    pub card_type: String,
    pub attribute: String,
    pub cost: String,
    pub power: String,
    pub counter: String,
    pub color: String,
    /// The "feature" line, e.g. `Supernovas/Straw Hat Crew`.
    pub subtype: String,
    pub effect: String,
    pub image_url: String,
    pub alternate_art: bool,
    pub series_id: String,
    pub series_name: String,
}

impl Card {
    pub fn get(&self, field: CardField) -> Cow<'_, str> {
        use CardField::*;
        match field {
            Id => Cow::Borrowed(&self.id),
            Name => Cow::Borrowed(&self.name),
            Rarity => Cow::Borrowed(&self.rarity),
            Type => Cow::Borrowed(&self.card_type),
            Attribute => Cow::Borrowed(&self.attribute),
            Cost => Cow::Borrowed(&self.cost),
            Power => Cow::Borrowed(&self.power),
            Counter => Cow::Borrowed(&self.counter),
            Color => Cow::Borrowed(&self.color),
            CardType => Cow::Borrowed(&self.subtype),
            Effect => Cow::Borrowed(&self.effect),
            ImageUrl => Cow::Borrowed(&self.image_url),
            AlternateArt => Cow::Borrowed(bool_str(self.alternate_art)),
            SeriesId => Cow::Borrowed(&self.series_id),
            SeriesName => Cow::Borrowed(&self.series_name),
        }
    }
}

/// Persisted spelling of booleans. Existing exports and downstream
/// converters expect `True` / `False`.
pub fn bool_str(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

/// Inverse of `bool_str`, lenient about case and `1`.
pub fn parse_bool(s: &str) -> bool {
    let t = s.trim();
    t.eq_ignore_ascii_case("true") || t == "1"
}

/* ---------------- Builder ---------------- */

/// Starts from an all-defaults card; every setter is infallible so a
/// missing sub-element can only ever leave a field at its default.
#[derive(Default)]
pub struct CardBuilder {
    card: Card,
}

impl CardBuilder {
    pub fn new(series: &Series) -> Self {
        let mut b = Self::default();
        b.card.series_id = series.id.clone();
        b.card.series_name = series.name.clone();
        b
    }

    pub fn name(mut self, v: impl Into<String>) -> Self { self.card.name = v.into(); self }
    pub fn id(mut self, v: impl Into<String>) -> Self { self.card.id = v.into(); self }
    pub fn rarity(mut self, v: impl Into<String>) -> Self { self.card.rarity = v.into(); self }
    pub fn card_type(mut self, v: impl Into<String>) -> Self { self.card.card_type = v.into(); self }
    pub fn attribute(mut self, v: impl Into<String>) -> Self { self.card.attribute = v.into(); self }
    pub fn cost(mut self, v: impl Into<String>) -> Self { self.card.cost = v.into(); self }
    pub fn power(mut self, v: impl Into<String>) -> Self { self.card.power = v.into(); self }
    pub fn counter(mut self, v: impl Into<String>) -> Self { self.card.counter = v.into(); self }
    pub fn color(mut self, v: impl Into<String>) -> Self { self.card.color = v.into(); self }
    pub fn subtype(mut self, v: impl Into<String>) -> Self { self.card.subtype = v.into(); self }
    pub fn effect(mut self, v: impl Into<String>) -> Self { self.card.effect = v.into(); self }

    /// Image URL and alternate-art flag are only ever set together.
    pub fn image(mut self, url: impl Into<String>, alternate_art: bool) -> Self {
        self.card.image_url = url.into();
        self.card.alternate_art = alternate_art;
        self
    }

    /// Apply `f` only when `v` is present.
    pub fn maybe<T>(self, v: Option<T>, f: impl FnOnce(Self, T) -> Self) -> Self {
        match v {
            Some(v) => f(self, v),
            None => self,
        }
    }

    pub fn build(self) -> Card { self.card }
}

/* ---------------- Column schema ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardField {
    Id,
    Name,
    Rarity,
    Type,
    Attribute,
    Cost,
    Power,
    Counter,
    Color,
    CardType,
    Effect,
    ImageUrl,
    AlternateArt,
    SeriesId,
    SeriesName,
}

impl CardField {
    pub const ALL: [CardField; 15] = [
        CardField::Id,
        CardField::Name,
        CardField::Rarity,
        CardField::Type,
        CardField::Attribute,
        CardField::Cost,
        CardField::Power,
        CardField::Counter,
        CardField::Color,
        CardField::CardType,
        CardField::Effect,
        CardField::ImageUrl,
        CardField::AlternateArt,
        CardField::SeriesId,
        CardField::SeriesName,
    ];

    /// Column key used in delimited output headers.
    pub fn key(self) -> &'static str {
        use CardField::*;
        match self {
            Id => "id",
            Name => "name",
            Rarity => "rarity",
            Type => "type",
            Attribute => "attribute",
            Cost => "cost",
            Power => "power",
            Counter => "counter",
            Color => "color",
            CardType => "card_type",
            Effect => "effect",
            ImageUrl => "image_url",
            AlternateArt => "alternate_art",
            SeriesId => "series_id",
            SeriesName => "series_name",
        }
    }

    /// Human header: `card_type` → `Card Type`.
    pub fn label(self) -> String {
        self.key()
            .split('_')
            .map(|w| {
                let mut cs = w.chars();
                match cs.next() {
                    Some(first) => join!(&first.to_uppercase().to_string(), cs.as_str()),
                    None => s!(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn from_key(key: &str) -> Option<CardField> {
        CardField::ALL.into_iter().find(|f| f.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_and_provenance() {
        let series = Series::new("569101", "ROMANCE DAWN [OP01]");
        let card = CardBuilder::new(&series).name("Zoro").build();
        assert_eq!(card.name, "Zoro");
        assert_eq!(card.counter, "");
        assert!(!card.alternate_art);
        assert_eq!(card.series_id, "569101");
        assert_eq!(card.series_name, "ROMANCE DAWN [OP01]");
    }

    #[test]
    fn maybe_skips_absent_values() {
        let series = Series::new("1", "S");
        let card = CardBuilder::new(&series)
            .maybe(None::<String>, |b, v| b.power(v))
            .maybe(Some("5000"), |b, v| b.counter(v))
            .build();
        assert_eq!(card.power, "");
        assert_eq!(card.counter, "5000");
    }

    #[test]
    fn labels_are_title_cased() {
        assert_eq!(CardField::Id.label(), "Id");
        assert_eq!(CardField::CardType.label(), "Card Type");
        assert_eq!(CardField::AlternateArt.label(), "Alternate Art");
        assert_eq!(CardField::from_key("series_name"), Some(CardField::SeriesName));
        assert_eq!(CardField::from_key("nope"), None);
    }

    #[test]
    fn bools_round_trip_through_text() {
        assert!(parse_bool(bool_str(true)));
        assert!(!parse_bool(bool_str(false)));
        assert!(parse_bool("true"));
        assert!(!parse_bool(""));
    }
}
