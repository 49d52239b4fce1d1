//! Inventory calculator domain.
//!
//! Pure, deterministic logic for recording line items (stock × unit price)
//! and deriving the running total. No terminal and no IO live here; the
//! front end renders [`InventoryView`] and drives [`InventoryForm`].

pub mod form;
pub mod inventory;
pub mod item;
pub mod money;
pub mod validation;
pub mod view;

pub use form::{Field, FormState, InventoryForm};
pub use inventory::{
    AddItem, Inventory, InventoryCommand, InventoryEvent, InventoryId, ItemAdded, ItemRemoved,
    RemoveItem,
};
pub use item::{LineItem, LineItemId, item_name};
pub use money::{Money, format_quantity};
pub use validation::{ValidInput, ValidationError, parse_positive, validate};
pub use view::{InventoryView, RowView};
