// src/specs/cards.rs
//! Scraping *spec* for one series page of the card list.
//!
//! Every card is a `<dl class="modalCol">`:
//! ```text
//! dl.modalCol
//!   dt > .infoCol > span(id) span(rarity) span(type)
//!      > .cardName
//!   dd > .frontCol > img[data-src|src]
//!      > .backCol > div.cost / div.attribute / div.power / div.counter
//!                 / div.color / div.feature / div.text
//! ```
//! Each field rule is independent; a missing container leaves its fields at
//! the default.

use url::Url;

use crate::config::consts::{
    ALT_ART_MARKER, BASE_URL, EFFECT_LABEL, FEATURE_LABEL, PARENT_DIR_MARKER,
};
use crate::core::html::{Document, Node};
use crate::core::sanitize::{strip_label, strip_parens};
use crate::data::{Card, CardBuilder, Series};

/// Extract every card on the page, in document order.
pub fn extract_cards(body: &str, series: &Series) -> Vec<Card> {
    extract_cards_with_base(body, series, BASE_URL)
}

/// Same as `extract_cards`, resolving image references against `base`.
pub fn extract_cards_with_base(body: &str, series: &Series, base: &str) -> Vec<Card> {
    let base = match Url::parse(base) {
        Ok(u) => Some(u),
        Err(e) => {
            logw!("Bad base URL {base:?} ({e}); image URLs left relative");
            None
        }
    };

    let doc = Document::parse(body);
    let cards: Vec<Card> = doc
        .root()
        .find_all(Some("dl"), "modalCol")
        .into_iter()
        .map(|frag| extract_card(frag, series, base.as_ref()))
        .collect();

    logd!("Series {}: {} cards extracted", series.id, cards.len());
    cards
}

fn extract_card(frag: Node<'_>, series: &Series, base: Option<&Url>) -> Card {
    let (id, rarity, card_type) = info_spans(frag);

    CardBuilder::new(series)
        .maybe(frag.find_first(None, "cardName"), |b, n| b.name(strip_parens(&n.text())))
        .id(id)
        .rarity(rarity)
        .card_type(card_type)
        .maybe(attribute(frag), |b, v| b.attribute(v))
        .maybe(shallow(frag, "cost"), |b, v| b.cost(v))
        .maybe(shallow(frag, "power"), |b, v| b.power(v))
        .maybe(shallow(frag, "counter"), |b, v| b.counter(v))
        .maybe(shallow(frag, "color"), |b, v| b.color(v))
        .maybe(labelled(frag, "feature", FEATURE_LABEL), |b, v| b.subtype(v))
        .maybe(labelled(frag, "text", EFFECT_LABEL), |b, v| b.effect(v))
        .maybe(image(frag, base), |b, (url, alt)| b.image(url, alt))
        .build()
}

/* ---------- field rules ---------- */

/// First three spans of `.infoCol`: id, rarity, type. Missing slots stay empty.
fn info_spans(frag: Node<'_>) -> (String, String, String) {
    let spans: Vec<String> = frag
        .find_first(None, "infoCol")
        .map(|info| info.descendants_named("span").iter().map(Node::text).collect())
        .unwrap_or_default();

    let at = |i: usize| spans.get(i).cloned().unwrap_or_default();
    (at(0), at(1), at(2))
}

/// Icon text wins, even when empty. Only without an icon do we read the text
/// following the heading.
fn attribute(frag: Node<'_>) -> Option<String> {
    let container = frag.find_first(Some("div"), "attribute")?;

    match container.first_named("i") {
        Some(icon) => Some(icon.text()),
        None => container.first_named("h3")?.next_sibling_text(),
    }
}

/// Own text of `div.<class>`, ignoring the `<h3>` label inside it.
fn shallow(frag: Node<'_>, class: &str) -> Option<String> {
    frag.find_first(Some("div"), class).map(|n| n.direct_text())
}

fn labelled(frag: Node<'_>, class: &str, label: &str) -> Option<String> {
    frag.find_first(Some("div"), class).map(|n| strip_label(&n.text(), label))
}

/// `(absolute_url, alternate_art)`; `None` leaves both fields at default.
fn image(frag: Node<'_>, base: Option<&Url>) -> Option<(String, bool)> {
    let img = frag.find_first(Some("div"), "frontCol")?.first_named("img")?;
    let raw = img.attr("data-src").or_else(|| img.attr("src"))?.trim();

    let reference = raw.strip_prefix(PARENT_DIR_MARKER).unwrap_or(raw);
    let alternate_art = reference.contains(ALT_ART_MARKER);
    Some((resolve(base, reference), alternate_art))
}

fn resolve(base: Option<&Url>, reference: &str) -> String {
    match base.map(|b| b.join(reference)) {
        Some(Ok(url)) => url.to_string(),
        Some(Err(e)) => {
            logw!("Could not resolve image reference {reference:?}: {e}");
            s!(reference)
        }
        None => s!(reference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Series { Series::new("569101", "ROMANCE DAWN [OP01]") }

    fn card_html(inner_dt: &str, inner_dd: &str) -> String {
        format!(r#"<dl class="modalCol"><dt>{inner_dt}</dt><dd>{inner_dd}</dd></dl>"#)
    }

    const FULL: &str = r#"
      <dl class="modalCol" id="OP01-001">
        <dt>
          <div class="infoCol"><span>OP01-001</span> | <span>L</span> | <span>LEADER</span></div>
          <div class="cardName">Roronoa Zoro</div>
        </dt>
        <dd>
          <div class="frontCol"><img class="lazy" data-src="../images/cardlist/card/OP01-001.png?240531" alt="Roronoa Zoro"></div>
          <div class="backCol">
            <div class="col2">
              <div class="cost"><h3>Life</h3>5</div>
              <div class="attribute"><h3>Attribute</h3><img src="../images/cardlist/attribute/ico_type01.png" alt="Slash"><i>Slash</i></div>
            </div>
            <div class="col2">
              <div class="power"><h3>Power</h3>5000</div>
              <div class="counter"><h3>Counter</h3>-</div>
            </div>
            <div class="col2"><div class="color"><h3>Color</h3>Red</div><div class="block"><h3>Block<br class="spInline"> icon</h3>1</div></div>
            <div class="feature"><h3>Type</h3>Supernovas/Straw Hat Crew</div>
            <div class="text"><h3>Effect</h3>[DON!! x1] [Your Turn] All of your Characters gain +1000 power.</div>
            <div class="getInfo"><h3>Card Set(s)</h3>-ROMANCE DAWN- [OP01]</div>
          </div>
        </dd>
      </dl>"#;

    #[test]
    fn full_card_extracts_every_field() {
        let cards = extract_cards(FULL, &series());
        assert_eq!(cards.len(), 1);
        let c = &cards[0];
        assert_eq!(c.id, "OP01-001");
        assert_eq!(c.rarity, "L");
        assert_eq!(c.card_type, "LEADER");
        assert_eq!(c.name, "Roronoa Zoro");
        assert_eq!(c.cost, "5");
        assert_eq!(c.attribute, "Slash");
        assert_eq!(c.power, "5000");
        assert_eq!(c.counter, "-");
        assert_eq!(c.color, "Red");
        assert_eq!(c.subtype, "Supernovas/Straw Hat Crew");
        assert_eq!(c.effect, "[DON!! x1] [Your Turn] All of your Characters gain +1000 power.");
        assert_eq!(
            c.image_url,
            "https://en.onepiece-cardgame.com/images/cardlist/card/OP01-001.png?240531"
        );
        assert!(!c.alternate_art);
        assert_eq!(c.series_id, "569101");
        assert_eq!(c.series_name, "ROMANCE DAWN [OP01]");
    }

    #[test]
    fn missing_counter_defaults_to_empty() {
        let html = card_html(
            r#"<div class="infoCol"><span>OP01-004</span></div><div class="cardName">Usopp</div>"#,
            r#"<div class="power"><h3>Power</h3>2000</div>"#,
        );
        let c = &extract_cards(&html, &series())[0];
        assert_eq!(c.counter, "");
        assert_eq!(c.power, "2000");
        assert_eq!(c.rarity, "");
        assert_eq!(c.card_type, "");
    }

    #[test]
    fn icon_wins_over_heading_sibling() {
        let html = card_html(
            "",
            r#"<div class="attribute"><h3>Attribute</h3>Strike<i>Slash</i></div>"#,
        );
        assert_eq!(extract_cards(&html, &series())[0].attribute, "Slash");
    }

    #[test]
    fn heading_sibling_used_without_icon() {
        let html = card_html("", r#"<div class="attribute"><h3>Attribute</h3> Wisdom </div>"#);
        assert_eq!(extract_cards(&html, &series())[0].attribute, "Wisdom");
    }

    #[test]
    fn empty_icon_still_blocks_heading_sibling() {
        let html = card_html("", r#"<div class="attribute"><h3>Attribute</h3>Strike<i></i></div>"#);
        assert_eq!(extract_cards(&html, &series())[0].attribute, "");
    }

    #[test]
    fn alternate_art_marker_detected() {
        let alt = card_html("", r#"<div class="frontCol"><img src="/images/card_p1.png"></div>"#);
        let base = card_html("", r#"<div class="frontCol"><img src="/images/card.png"></div>"#);
        assert!(extract_cards(&alt, &series())[0].alternate_art);
        assert!(!extract_cards(&base, &series())[0].alternate_art);
    }

    #[test]
    fn image_fields_set_together_or_not_at_all() {
        let no_front = card_html("", r#"<div class="backCol"><img src="/x_p1.png"></div>"#);
        let c = &extract_cards(&no_front, &series())[0];
        assert_eq!(c.image_url, "");
        assert!(!c.alternate_art);

        let no_img = card_html("", r#"<div class="frontCol"></div>"#);
        let c = &extract_cards(&no_img, &series())[0];
        assert_eq!(c.image_url, "");
        assert!(!c.alternate_art);
    }

    #[test]
    fn parent_marker_stripped_before_resolving() {
        let html = card_html("", r#"<div class="frontCol"><img src="../images/cardlist/OP01-001.png"></div>"#);
        let c = &extract_cards_with_base(&html, &series(), "https://example.org/cardlist/");
        assert_eq!(c[0].image_url, "https://example.org/images/cardlist/OP01-001.png");
    }

    #[test]
    fn empty_fragment_is_all_defaults() {
        let c = &extract_cards(r#"<dl class="modalCol"></dl>"#, &series())[0];
        assert_eq!(c.name, "");
        assert_eq!(c.id, "");
        assert_eq!(c.attribute, "");
        assert_eq!(c.subtype, "");
        assert_eq!(c.series_id, "569101");
    }

    #[test]
    fn parens_stripped_from_name() {
        let html = card_html(r#"<div class="cardName">Nami (Parallel)</div>"#, "");
        assert_eq!(extract_cards(&html, &series())[0].name, "Nami Parallel");
    }

    #[test]
    fn document_order_is_kept() {
        let html = format!(
            "{}{}",
            card_html(r#"<div class="infoCol"><span>B</span></div>"#, ""),
            card_html(r#"<div class="infoCol"><span>A</span></div>"#, ""),
        );
        let ids: Vec<String> = extract_cards(&html, &series()).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["B", "A"]);
    }

    #[test]
    fn other_dl_elements_ignored() {
        let html = r#"<dl class="other"><dt>x</dt></dl><div class="modalCol">y</div>"#;
        assert!(extract_cards(html, &series()).is_empty());
    }
}
