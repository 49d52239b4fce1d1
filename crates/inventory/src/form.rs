//! The inventory form: pending input, the inventory, and the last error.

use chrono::Utc;
use tracing::{debug, info, warn};

use stocktally_core::{Aggregate, AggregateId, DomainError};

use crate::inventory::{AddItem, Inventory, InventoryCommand, InventoryEvent, InventoryId, RemoveItem};
use crate::item::{LineItem, LineItemId};
use crate::money::Money;
use crate::validation::{ValidationError, validate};

/// Which input a piece of text belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Stock,
    Price,
}

/// Pending input plus the transient error line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub stock: String,
    pub price: String,
    pub error: Option<String>,
}

/// Owns all state of the calculator.
///
/// Every operation runs to completion synchronously. Validation failures are
/// recorded on the form (`error()`) and also returned for callers that care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryForm {
    state: FormState,
    inventory: Inventory,
}

impl Default for InventoryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryForm {
    pub fn new() -> Self {
        Self::with_inventory(Inventory::empty(InventoryId::new(AggregateId::new())))
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            state: FormState::default(),
            inventory,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn items(&self) -> &[LineItem] {
        self.inventory.items()
    }

    pub fn stock(&self) -> &str {
        &self.state.stock
    }

    pub fn price(&self) -> &str {
        &self.state.price
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Index that the next successfully added item will be named with.
    pub fn item_counter(&self) -> u64 {
        self.inventory.next_item_number()
    }

    pub fn set_stock(&mut self, text: impl Into<String>) {
        self.state.stock = text.into();
    }

    pub fn set_price(&mut self, text: impl Into<String>) {
        self.state.price = text.into();
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Stock => &self.state.stock,
            Field::Price => &self.state.price,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Stock => &mut self.state.stock,
            Field::Price => &mut self.state.price,
        }
    }

    /// Try to commit the pending stock/price as a new line item.
    ///
    /// On failure the error message is replaced and nothing else changes. On
    /// success both fields and the error are cleared.
    pub fn add_item(&mut self) -> Result<Vec<InventoryEvent>, ValidationError> {
        match self.try_add() {
            Ok(events) => {
                self.state.stock.clear();
                self.state.price.clear();
                self.state.error = None;
                Ok(events)
            }
            Err(err) => {
                debug!(kind = err.kind(), "add item rejected");
                self.state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn try_add(&mut self) -> Result<Vec<InventoryEvent>, ValidationError> {
        let input = validate(&self.state.stock, &self.state.price)?;
        let price = Money::new(input.price);
        if Money::line_total(input.stock, price).is_none() {
            return Err(ValidationError::InvalidNumber);
        }

        let command = InventoryCommand::AddItem(AddItem {
            item_id: LineItemId::new(),
            stock: input.stock,
            price,
            occurred_at: Utc::now(),
        });

        let events = self.inventory.execute(&command).map_err(|err: DomainError| {
            warn!(error = %err, "inventory rejected validated input");
            ValidationError::InvalidNumber
        })?;

        for event in &events {
            if let InventoryEvent::ItemAdded(e) = event {
                info!(item_id = %e.item_id, name = %e.name, total = %e.total, "item added");
            }
        }
        Ok(events)
    }

    /// Remove the item with `id`. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: LineItemId) -> Vec<InventoryEvent> {
        let command = InventoryCommand::RemoveItem(RemoveItem {
            item_id: id,
            occurred_at: Utc::now(),
        });

        match self.inventory.execute(&command) {
            Ok(events) => {
                if events.is_empty() {
                    debug!(item_id = %id, "remove ignored: no such item");
                }
                for event in &events {
                    if let InventoryEvent::ItemRemoved(e) = event {
                        info!(item_id = %e.item_id, name = %e.name, "item removed");
                    }
                }
                events
            }
            Err(err) => {
                warn!(error = %err, item_id = %id, "remove failed");
                Vec::new()
            }
        }
    }

    /// Sum of all current line totals; zero when empty.
    pub fn total_value(&self) -> Money {
        self.inventory.total_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn filled(stock: &str, price: &str) -> InventoryForm {
        let mut form = InventoryForm::new();
        form.set_stock(stock);
        form.set_price(price);
        form
    }

    #[test]
    fn add_clears_fields_and_error() {
        let mut form = filled("", "1");
        assert!(form.add_item().is_err());
        assert!(form.error().is_some());

        form.set_stock("3");
        let events = form.add_item().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(form.stock(), "");
        assert_eq!(form.price(), "");
        assert_eq!(form.error(), None);
        assert_eq!(form.items().len(), 1);
        assert_eq!(form.item_counter(), 2);
    }

    #[test]
    fn missing_field_keeps_everything() {
        let mut form = filled("5", "");
        let err = form.add_item().unwrap_err();

        assert_eq!(err, ValidationError::MissingField);
        assert_eq!(form.error(), Some("Please fill both stock and price fields"));
        assert_eq!(form.stock(), "5");
        assert!(form.items().is_empty());
        assert_eq!(form.item_counter(), 1);
    }

    #[test]
    fn invalid_number_keeps_everything() {
        for (stock, price) in [("-5", "1"), ("1", "0"), ("x", "1")] {
            let mut form = filled(stock, price);
            let err = form.add_item().unwrap_err();

            assert_eq!(err, ValidationError::InvalidNumber);
            assert_eq!(form.error(), Some("Stock and price must be positive numbers"));
            assert_eq!(form.stock(), stock);
            assert_eq!(form.price(), price);
            assert!(form.items().is_empty());
        }
    }

    #[test]
    fn error_is_replaced_by_the_latest_attempt() {
        let mut form = filled("", "");
        let _ = form.add_item();
        form.set_stock("-1");
        form.set_price("2");
        let _ = form.add_item();
        assert_eq!(form.error(), Some("Stock and price must be positive numbers"));
    }

    #[test]
    fn overflowing_product_is_invalid_not_a_panic() {
        let max = Decimal::MAX.to_string();
        let mut form = filled(&max, "2");
        assert_eq!(form.add_item(), Err(ValidationError::InvalidNumber));
        assert!(form.items().is_empty());
    }

    #[test]
    fn running_total_overflow_is_invalid_and_keeps_input() {
        let huge = "50000000000000000000000000000";
        let mut form = filled(huge, "1");
        form.add_item().unwrap();

        form.set_stock(huge);
        form.set_price("1");
        assert_eq!(form.add_item(), Err(ValidationError::InvalidNumber));
        assert_eq!(form.error(), Some("Stock and price must be positive numbers"));
        assert_eq!(form.stock(), huge);
        assert_eq!(form.items().len(), 1);
        assert_eq!(form.total_value().amount().to_string(), huge);
    }

    #[test]
    fn names_are_never_reused() {
        let mut form = InventoryForm::new();
        for _ in 0..2 {
            form.set_stock("1");
            form.set_price("1");
            form.add_item().unwrap();
        }
        let first = form.items()[0].id_typed();
        form.remove_item(first);

        assert_eq!(form.items()[0].name(), "Item 2");

        form.set_stock("1");
        form.set_price("1");
        form.add_item().unwrap();
        assert_eq!(form.items()[1].name(), "Item 3");
    }

    #[test]
    fn remove_unknown_is_a_no_op() {
        let mut form = filled("2", "3");
        form.add_item().unwrap();
        let before = form.clone();

        assert!(form.remove_item(LineItemId::new()).is_empty());
        assert_eq!(form, before);
        assert_eq!(form.total_value(), Money::new(dec!(6)));
    }

    #[test]
    fn empty_total_is_zero() {
        assert_eq!(InventoryForm::new().total_value(), Money::ZERO);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a valid add grows the total by exactly stock × price.
        #[test]
        fn add_grows_total_by_line_total(
            stock in 1u32..100_000u32,
            price_cents in 1i64..10_000_000i64,
            prior in 0usize..5
        ) {
            let mut form = InventoryForm::new();
            for _ in 0..prior {
                form.set_stock("3");
                form.set_price("0.75");
                form.add_item().unwrap();
            }

            let price = Decimal::new(price_cents, 2);
            let before = form.total_value().amount();
            form.set_stock(stock.to_string());
            form.set_price(price.to_string());
            form.add_item().unwrap();

            let item = form.items().last().unwrap();
            let expected = Decimal::from(stock) * price;
            prop_assert_eq!(item.total().amount(), expected);
            prop_assert_eq!(form.total_value().amount() - before, expected);
        }

        /// Property: removing an item drops the total by exactly its total.
        #[test]
        fn remove_shrinks_total_by_item_total(
            stocks in prop::collection::vec(1u32..1_000u32, 1..8),
            pick in any::<prop::sample::Index>()
        ) {
            let mut form = InventoryForm::new();
            for stock in &stocks {
                form.set_stock(stock.to_string());
                form.set_price("1.10");
                form.add_item().unwrap();
            }

            let victim = form.items()[pick.index(stocks.len())].clone();
            let before = form.total_value().amount();
            let events = form.remove_item(victim.id_typed());

            prop_assert_eq!(events.len(), 1);
            prop_assert_eq!(form.items().len(), stocks.len() - 1);
            prop_assert!(form.inventory().get(victim.id_typed()).is_none());
            prop_assert_eq!(before - form.total_value().amount(), victim.total().amount());
        }
    }
}
