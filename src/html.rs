// src/html.rs

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("selector should parse")
}

pub static TABLE: Lazy<Selector> = Lazy::new(|| selector("table"));
pub static ROW: Lazy<Selector> = Lazy::new(|| selector("tr"));
pub static HEADER_CELL: Lazy<Selector> = Lazy::new(|| selector("th"));
pub static DATA_CELL: Lazy<Selector> = Lazy::new(|| selector("td"));
pub static LINK: Lazy<Selector> = Lazy::new(|| selector("a"));

/// `<div property="spdx:licenseText" class="license-text"> ... </div>`
pub static LICENSE_TEXT: Lazy<Selector> =
    Lazy::new(|| selector(r#"div[property="spdx:licenseText"]"#));

/// Typed traversal shared by whole documents and single elements.
pub trait Node {
    /// Every matching descendant, in document order.
    fn find_all<'s>(&'s self, selector: &Selector) -> Vec<ElementRef<'s>>;

    /// First matching descendant in document order.
    fn find<'s>(&'s self, selector: &Selector) -> Option<ElementRef<'s>>;

    /// Descendant text with each text node trimmed, empty ones dropped and
    /// the rest joined by a single space.
    fn text_joined(&self) -> String;
}

impl Node for ElementRef<'_> {
    fn find_all<'s>(&'s self, selector: &Selector) -> Vec<ElementRef<'s>> {
        self.select(selector).collect()
    }

    fn find<'s>(&'s self, selector: &Selector) -> Option<ElementRef<'s>> {
        self.select(selector).next()
    }

    fn text_joined(&self) -> String {
        self.text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A parsed HTML page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full page. The HTML5 parser recovers from broken markup, so
    /// this never fails.
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// The first `<table>` in document order.
    pub fn first_table(&self) -> Result<ElementRef<'_>> {
        self.find(&TABLE)
            .ok_or_else(|| anyhow!("no <table> element found"))
    }

    /// Text of the license text container, if the page has a non-empty one.
    pub fn license_text(&self) -> Option<String> {
        self.find(&LICENSE_TEXT)
            .map(|div| div.text_joined())
            .filter(|text| !text.is_empty())
    }
}

impl Node for Document {
    fn find_all<'s>(&'s self, selector: &Selector) -> Vec<ElementRef<'s>> {
        self.html.select(selector).collect()
    }

    fn find<'s>(&'s self, selector: &Selector) -> Option<ElementRef<'s>> {
        self.html.select(selector).next()
    }

    fn text_joined(&self) -> String {
        self.html.root_element().text_joined()
    }
}
