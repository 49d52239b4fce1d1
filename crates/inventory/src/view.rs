//! Display model derived from the form on every render.

use crate::form::InventoryForm;
use crate::item::{LineItem, LineItemId};
use crate::money::format_quantity;

pub const TITLE: &str = "Quick Inventory Calculator";
pub const STOCK_LABEL: &str = "Stock Quantity";
pub const STOCK_PLACEHOLDER: &str = "Quantity";
pub const PRICE_LABEL: &str = "Unit Price";
pub const PRICE_PLACEHOLDER: &str = "Unit price";
pub const ADD_LABEL: &str = "Add Item";
pub const REMOVE_LABEL: &str = "Remove";
pub const TOTAL_LABEL: &str = "Total Inventory Value:";
pub const EMPTY_MESSAGE: &str = "No items added yet. Start by entering stock and price values.";
pub const COLUMN_HEADERS: [&str; 5] = ["Item", "Stock", "Price", "Total Value", "Action"];

pub const DEFAULT_CURRENCY: &str = "$";

/// One table row, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: LineItemId,
    pub name: String,
    pub stock: String,
    pub price: String,
    pub total: String,
}

impl RowView {
    fn from_item(item: &LineItem, currency: &str) -> Self {
        Self {
            id: item.id_typed(),
            name: item.name().to_string(),
            stock: format_quantity(item.stock()),
            price: item.price().format_with(currency),
            total: item.total().format_with(currency),
        }
    }
}

/// Everything the surface shows, as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub stock_input: String,
    pub price_input: String,
    pub error: Option<String>,
    pub rows: Vec<RowView>,
    pub total: String,
}

impl InventoryView {
    pub fn new(form: &InventoryForm, currency: &str) -> Self {
        Self {
            stock_input: form.stock().to_string(),
            price_input: form.price().to_string(),
            error: form.error().map(str::to_string),
            rows: form
                .items()
                .iter()
                .map(|item| RowView::from_item(item, currency))
                .collect(),
            total: form.total_value().format_with(currency),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The placeholder message, shown instead of the table when empty.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_MESSAGE)
    }
}

impl From<&InventoryForm> for InventoryView {
    fn from(form: &InventoryForm) -> Self {
        Self::new(form, DEFAULT_CURRENCY)
    }
}
