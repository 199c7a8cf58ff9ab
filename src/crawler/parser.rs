//! HTML parsers for catalogue list pages and item detail pages
//!
//! Both parsers are tolerant: missing markup yields fewer records or absent
//! fields, never an error.

use crate::links::resolve_link;
use crate::model::{ItemDetail, ItemSummary};
use scraper::{ElementRef, Html, Selector};
use url::Url;

const ITEM_NODE: &str = "article.product_pod";
const TITLE_ANCHOR: &str = "h3 > a";
const PRICE: &str = ".product_main .price_color";
const AVAILABILITY: &str = ".product_main .availability";
const DESCRIPTION: &str = "#product_description + p";

/// Parses a catalogue list page into item summaries
///
/// # Extraction Rules
///
/// - Item nodes are `article.product_pod` elements
/// - The title anchor is the `h3 > a` inside each node
/// - The title is the anchor's `title` attribute, or its text if absent
/// - The anchor's `href` is resolved against `base`
/// - Nodes without a title anchor, title or resolvable link are skipped
///
/// An empty vector means the page had no usable items.
///
/// # Example
///
/// ```
/// use catalogue_bench::crawler::parse_list_page;
/// use url::Url;
///
/// let html = r#"<article class="product_pod"><h3><a href="book_1/index.html" title="Book">Book</a></h3></article>"#;
/// let base = Url::parse("https://books.toscrape.com/catalogue/").unwrap();
/// let items = parse_list_page(html, &base);
/// assert_eq!(items[0].link, "https://books.toscrape.com/catalogue/book_1/index.html");
/// ```
pub fn parse_list_page(html: &str, base: &Url) -> Vec<ItemSummary> {
    let document = Html::parse_document(html);

    let (Ok(item_selector), Ok(anchor_selector)) =
        (Selector::parse(ITEM_NODE), Selector::parse(TITLE_ANCHOR))
    else {
        return Vec::new();
    };

    document
        .select(&item_selector)
        .filter_map(|node| {
            let anchor = node.select(&anchor_selector).next()?;
            extract_summary(anchor, base)
        })
        .collect()
}

fn extract_summary(anchor: ElementRef<'_>, base: &Url) -> Option<ItemSummary> {
    let title = anchor
        .value()
        .attr("title")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| non_empty_text(anchor))?;

    let link = resolve_link(anchor.value().attr("href")?, base)?;

    Some(ItemSummary { title, link })
}

/// Parses an item detail page
///
/// # Extraction Rules
///
/// | Field | Selector |
/// |-------|----------|
/// | price | `.product_main .price_color` |
/// | availability | `.product_main .availability` |
/// | description_length | `#product_description + p` |
///
/// Each field is extracted independently. A field is absent only when its
/// element is missing; an element with no text yields an empty value.
pub fn parse_detail(html: &str) -> ItemDetail {
    let document = Html::parse_document(html);

    let price = select_text(&document, PRICE);
    let availability = select_text(&document, AVAILABILITY);
    let description_length = select_text(&document, DESCRIPTION).map(|s| s.chars().count());

    ItemDetail {
        price,
        availability,
        description_length,
    }
}

/// Returns the trimmed text of the first element matching `selector`
fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next().map(trimmed_text)
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn non_empty_text(element: ElementRef<'_>) -> Option<String> {
    Some(trimmed_text(element)).filter(|t| !t.is_empty())
}
