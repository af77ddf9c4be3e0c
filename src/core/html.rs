// src/core/html.rs
//
// Thin navigation layer over `scraper`. Specs only need a handful of lookups
// (by tag + class, by tag + attribute, text, shallow text, attribute, the
// text right after an element), so that's all this exposes.

use scraper::{ElementRef, Html, Node as DomNode, Selector};

use super::sanitize::normalize_ws;

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self { html: Html::parse_document(body) }
    }

    pub fn root(&self) -> Node<'_> {
        Node { el: self.html.root_element() }
    }
}

#[derive(Clone, Copy)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

impl<'a> Node<'a> {
    /// All descendants matching `tag` (or any tag when `None`) that carry `class`.
    pub fn find_all(&self, tag: Option<&str>, class: &str) -> Vec<Node<'a>> {
        match selector_for(tag, Some(class), None) {
            Some(sel) => self.el.select(&sel).map(|el| Node { el }).collect(),
            None => Vec::new(),
        }
    }

    pub fn find_first(&self, tag: Option<&str>, class: &str) -> Option<Node<'a>> {
        let sel = selector_for(tag, Some(class), None)?;
        self.el.select(&sel).next().map(|el| Node { el })
    }

    pub fn find_by_attr(&self, tag: &str, attr: &str, value: &str) -> Option<Node<'a>> {
        let sel = selector_for(Some(tag), None, Some((attr, value)))?;
        self.el.select(&sel).next().map(|el| Node { el })
    }

    /// Descendants with the given tag name, in document order.
    pub fn descendants_named(&self, tag: &str) -> Vec<Node<'a>> {
        match selector_for(Some(tag), None, None) {
            Some(sel) => self.el.select(&sel).map(|el| Node { el }).collect(),
            None => Vec::new(),
        }
    }

    pub fn first_named(&self, tag: &str) -> Option<Node<'a>> {
        let sel = selector_for(Some(tag), None, None)?;
        self.el.select(&sel).next().map(|el| Node { el })
    }

    /// Full text content, whitespace collapsed and trimmed.
    pub fn text(&self) -> String {
        normalize_ws(&self.el.text().collect::<String>())
    }

    /// Only the element's own text children; nested elements are skipped.
    pub fn direct_text(&self) -> String {
        let own: String = self
            .el
            .children()
            .filter_map(|child| match child.value() {
                DomNode::Text(t) => Some(&**t),
                _ => None,
            })
            .collect();
        normalize_ws(&own)
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.el.value().attr(name)
    }

    /// Text of the sibling node right after this element, if that sibling is
    /// a text node. An element sibling yields `None`.
    pub fn next_sibling_text(&self) -> Option<String> {
        let sib = self.el.next_sibling()?;
        match sib.value() {
            DomNode::Text(t) => Some(normalize_ws(t)),
            _ => None,
        }
    }
}

/// Tag/class/attr values come from our own constants, but a bad one should
/// just match nothing rather than panic.
fn selector_for(tag: Option<&str>, class: Option<&str>, attr: Option<(&str, &str)>) -> Option<Selector> {
    let mut css = s!(tag.unwrap_or("*"));
    if let Some(c) = class {
        css.push('.');
        css.push_str(c);
    }
    if let Some((name, value)) = attr {
        css.push_str(&format!("[{name}=\"{}\"]", value.replace('"', "\\\"")));
    }
    match Selector::parse(&css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            logw!("Bad selector {css:?}: {e:?}");
            None
        }
    }
}
