use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocktally_core::{Entity, EntityId};

use crate::money::Money;

/// Line item identifier.
///
/// Unrelated to the display name: the name comes from the inventory's item
/// counter, the id is a fresh time-ordered token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(pub EntityId);

impl LineItemId {
    pub fn new() -> Self {
        Self(EntityId::new())
    }
}

impl Default for LineItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One recorded inventory entry.
///
/// Immutable once created; `total` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    id: LineItemId,
    name: String,
    stock: Decimal,
    price: Money,
    total: Money,
}

impl LineItem {
    pub(crate) fn new(id: LineItemId, name: String, stock: Decimal, price: Money, total: Money) -> Self {
        Self {
            id,
            name,
            stock,
            price,
            total,
        }
    }

    pub fn id_typed(&self) -> LineItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> Decimal {
        self.stock
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Display name for the `n`-th item ever added (1-based).
pub fn item_name(n: u64) -> String {
    format!("Item {n}")
}
