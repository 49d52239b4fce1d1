use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocktally_core::{Aggregate, AggregateId, AggregateRoot, DomainError};
use stocktally_events::Event;

use crate::item::{LineItem, LineItemId, item_name};
use crate::money::Money;

/// Inventory identifier (one per form instance).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryId(pub AggregateId);

impl InventoryId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InventoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Inventory.
///
/// Ordered line items plus the counter that names the next one. Insertion
/// order is display order; removals never reorder what is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    id: InventoryId,
    items: Vec<LineItem>,
    next_item_number: u64,
    version: u64,
}

impl Inventory {
    pub fn empty(id: InventoryId) -> Self {
        Self {
            id,
            items: Vec::new(),
            next_item_number: 1,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> InventoryId {
        self.id
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, item_id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id_typed() == item_id)
    }

    pub fn contains(&self, item_id: LineItemId) -> bool {
        self.get(item_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counter used for the next item's name. Starts at 1, never goes back.
    pub fn next_item_number(&self) -> u64 {
        self.next_item_number
    }

    /// Sum of every current item's total, recomputed on each call.
    pub fn total_value(&self) -> Money {
        self.items.iter().map(LineItem::total).sum()
    }
}

impl AggregateRoot for Inventory {
    type Id = InventoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub item_id: LineItemId,
    pub stock: Decimal,
    pub price: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub item_id: LineItemId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub inventory_id: InventoryId,
    pub item_id: LineItemId,
    pub name: String,
    pub stock: Decimal,
    pub price: Money,
    pub total: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub inventory_id: InventoryId,
    pub item_id: LineItemId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.line_item.added",
            InventoryEvent::ItemRemoved(_) => "inventory.line_item.removed",
        }
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemAdded(e) => {
                self.items.push(LineItem::new(
                    e.item_id,
                    e.name.clone(),
                    e.stock,
                    e.price,
                    e.total,
                ));
                self.next_item_number += 1;
            }
            InventoryEvent::ItemRemoved(e) => {
                self.items.retain(|item| item.id_typed() != e.item_id);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddItem(cmd) => self.handle_add(cmd),
            InventoryCommand::RemoveItem(cmd) => Ok(self.handle_remove(cmd)),
        }
    }
}

impl Inventory {
    fn handle_add(&self, cmd: &AddItem) -> Result<Vec<InventoryEvent>, DomainError> {
        if cmd.stock <= Decimal::ZERO {
            return Err(DomainError::validation("stock must be positive"));
        }
        if cmd.price.amount() <= Decimal::ZERO {
            return Err(DomainError::validation("price must be positive"));
        }
        if self.contains(cmd.item_id) {
            return Err(DomainError::conflict("line item already exists"));
        }

        let total = Money::line_total(cmd.stock, cmd.price)
            .ok_or_else(|| DomainError::invariant("line total overflows"))?;
        if self.total_value().checked_add(total).is_none() {
            return Err(DomainError::invariant("inventory total overflows"));
        }

        Ok(vec![InventoryEvent::ItemAdded(ItemAdded {
            inventory_id: self.id,
            item_id: cmd.item_id,
            name: item_name(self.next_item_number),
            stock: cmd.stock,
            price: cmd.price,
            total,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> Vec<InventoryEvent> {
        // Removing an unknown id is a no-op, not an error.
        let Some(item) = self.get(cmd.item_id) else {
            return Vec::new();
        };

        vec![InventoryEvent::ItemRemoved(ItemRemoved {
            inventory_id: self.id,
            item_id: cmd.item_id,
            name: item.name().to_string(),
            occurred_at: cmd.occurred_at,
        })]
    }
}
