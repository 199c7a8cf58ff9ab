//! Item records produced by the list and detail parsers

/// Summary of one item as listed on a catalogue page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemSummary {
    /// Display title
    pub title: String,

    /// Absolute URL of the item's detail page
    pub link: String,
}

/// Structured fields from an item's detail page
///
/// Each field is independently absent when its markup is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemDetail {
    pub price: Option<String>,
    pub availability: Option<String>,

    /// Length in characters of the trimmed description text
    pub description_length: Option<usize>,
}

impl ItemDetail {
    /// Returns true if every field was found
    pub fn is_complete(&self) -> bool {
        self.price.is_some() && self.availability.is_some() && self.description_length.is_some()
    }
}

/// An item summary with its detail attached
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnrichedItem {
    pub summary: ItemSummary,
    pub detail: ItemDetail,
}

impl EnrichedItem {
    pub fn new(summary: ItemSummary, detail: ItemDetail) -> Self {
        Self { summary, detail }
    }
}
