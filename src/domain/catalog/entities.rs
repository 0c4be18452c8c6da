use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

/// Item identifier as issued by the API (a UUID string in practice)
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Deref, Display, From, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Catalog record returned by `get_items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub product: String,
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
}

/// Render model for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: String,
    pub product: String,
    pub price: String,
    /// `None` when the record has no brand or an empty one; the brand line is then left out.
    pub brand: Option<String>,
}

impl From<&Item> for ItemCard {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.value().to_string(),
            product: item.product.clone(),
            price: format_price(item.price),
            brand: item.brand.clone().filter(|brand| !brand.is_empty()),
        }
    }
}

/// Prints a price the way the storefront always has: `16700`, not `16700.0`.
pub fn format_price(price: f64) -> String {
    format!("{}", price)
}
