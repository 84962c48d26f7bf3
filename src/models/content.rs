use serde::{Deserialize, Serialize};

/// A single piece of wellness content in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    /// Unique, stable identifier (join key between the index and ranked output)
    pub id: u32,
    pub title: String,
    pub link: String,
    /// Free-form label such as "Audio (Focus)"
    pub category: String,
    /// Space-separated descriptor words used as the item's textual signature
    pub tags: String,
}

impl ContentItem {
    pub fn new(id: u32, title: &str, link: &str, category: &str, tags: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            link: link.to_string(),
            category: category.to_string(),
            tags: tags.to_string(),
        }
    }
}

/// Read-only, id-ordered collection of content items
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    /// Builds a catalog, ordering items by id.
    ///
    /// Duplicate ids are rejected since ids key the weighting index.
    pub fn new(mut items: Vec<ContentItem>) -> Result<Self, String> {
        items.sort_by_key(|item| item.id);
        if let Some(pair) = items.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(format!("duplicate content id {}", pair[0].id));
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&ContentItem> {
        self.items
            .binary_search_by_key(&id, |item| item.id)
            .ok()
            .map(|idx| &self.items[idx])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
