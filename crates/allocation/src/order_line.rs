use serde::{Deserialize, Serialize};

use stockline_core::{OrderReference, Sku, ValueObject};

/// Order line: one unit of customer demand for a quantity of one sku.
///
/// Compared and hashed by value, so two lines with the same order reference,
/// sku and quantity are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderLine {
    order_reference: OrderReference,
    sku: Sku,
    quantity: u64,
}

impl OrderLine {
    pub fn new(
        order_reference: impl Into<OrderReference>,
        sku: impl Into<Sku>,
        quantity: u64,
    ) -> Self {
        Self {
            order_reference: order_reference.into(),
            sku: sku.into(),
            quantity,
        }
    }

    pub fn order_reference(&self) -> &OrderReference {
        &self.order_reference
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

impl ValueObject for OrderLine {}
