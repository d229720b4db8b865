use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockline_core::{BatchReference, DomainError, DomainResult, Entity, Sku};

use crate::order_line::OrderLine;

/// Entity: a quantity of stock of one sku, available now or by a future date.
///
/// The set of allocated order lines is the source of truth for committed
/// quantity. Invariants:
/// - `available_quantity() == purchased_quantity() - allocated_quantity()`, never negative
/// - every allocated line has the batch's sku
///
/// Equality and hashing use the batch reference only: two batches with the
/// same sku and quantity are still distinct stock lots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BatchSnapshot", into = "BatchSnapshot")]
pub struct Batch {
    reference: BatchReference,
    sku: Sku,
    purchased_quantity: u64,
    /// `None` means the stock is already in the warehouse.
    eta: Option<NaiveDate>,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    pub fn new(
        reference: impl Into<BatchReference>,
        sku: impl Into<Sku>,
        purchased_quantity: u64,
        eta: Option<NaiveDate>,
    ) -> Self {
        Self {
            reference: reference.into(),
            sku: sku.into(),
            purchased_quantity,
            eta,
            allocations: HashSet::new(),
        }
    }

    pub fn reference(&self) -> &BatchReference {
        &self.reference
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn purchased_quantity(&self) -> u64 {
        self.purchased_quantity
    }

    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    /// Lines currently committed against this batch (unordered).
    pub fn allocations(&self) -> impl Iterator<Item = &OrderLine> {
        self.allocations.iter()
    }

    pub fn is_allocated(&self, line: &OrderLine) -> bool {
        self.allocations.contains(line)
    }

    /// Sum of the quantities of all allocated lines.
    pub fn allocated_quantity(&self) -> u64 {
        self.allocations.iter().map(OrderLine::quantity).sum()
    }

    pub fn available_quantity(&self) -> u64 {
        // Allocated never exceeds purchased: `allocate` and snapshot restore both check it.
        self.purchased_quantity - self.allocated_quantity()
    }

    /// Whether `line` fits this batch: same sku and quantity within what is
    /// still available (an exact fit counts).
    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        line.sku() == &self.sku && line.quantity() <= self.available_quantity()
    }

    /// Commit `line` against this batch.
    ///
    /// Allocating a line that is already allocated (by value) is a no-op.
    /// Returns [`DomainError::OutOfStock`] when the sku differs or the batch
    /// lacks the quantity; the batch is left untouched in that case.
    pub fn allocate(&mut self, line: OrderLine) -> DomainResult<()> {
        if self.allocations.contains(&line) {
            tracing::trace!(
                batch = %self.reference,
                order = %line.order_reference(),
                "line already allocated"
            );
            return Ok(());
        }

        let available = self.available_quantity();
        if line.sku() != &self.sku {
            tracing::debug!(
                batch = %self.reference,
                sku = %line.sku(),
                order = %line.order_reference(),
                "allocation rejected: sku mismatch"
            );
            return Err(DomainError::out_of_stock(format!(
                "batch {} holds sku {}, order {} requires sku {}",
                self.reference,
                self.sku,
                line.order_reference(),
                line.sku()
            )));
        }
        if line.quantity() > available {
            tracing::debug!(
                batch = %self.reference,
                sku = %self.sku,
                order = %line.order_reference(),
                requested = line.quantity(),
                available,
                "allocation rejected: insufficient quantity"
            );
            return Err(DomainError::out_of_stock(format!(
                "batch {} ({}): requested {}, available {}",
                self.reference,
                self.sku,
                line.quantity(),
                available
            )));
        }

        tracing::debug!(
            batch = %self.reference,
            sku = %self.sku,
            order = %line.order_reference(),
            available = available - line.quantity(),
            "line allocated"
        );
        self.allocations.insert(line);
        Ok(())
    }

    /// Release `line` from this batch. Lines that are not allocated here are
    /// ignored.
    pub fn deallocate(&mut self, line: &OrderLine) {
        if !self.allocations.remove(line) {
            tracing::trace!(
                batch = %self.reference,
                order = %line.order_reference(),
                "line not allocated; nothing to release"
            );
            return;
        }

        tracing::debug!(
            batch = %self.reference,
            sku = %self.sku,
            order = %line.order_reference(),
            available = self.available_quantity(),
            "line deallocated"
        );
    }

    /// Comparator by arrival: warehouse stock (`eta == None`) first, then
    /// earliest eta. Intended for `sort_by` in a batch-selection policy.
    pub fn arrival_order(a: &Batch, b: &Batch) -> Ordering {
        match (a.eta, b.eta) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => x.cmp(&y),
        }
    }
}

impl Entity for Batch {
    type Id = BatchReference;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for Batch {}

impl core::hash::Hash for Batch {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

/// Serializable state of a [`Batch`].
///
/// Converting back into a `Batch` re-checks the invariants, so a stored
/// snapshot cannot smuggle in over-allocation or foreign-sku lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSnapshot {
    pub reference: BatchReference,
    pub sku: Sku,
    pub purchased_quantity: u64,
    pub eta: Option<NaiveDate>,
    #[serde(default)]
    pub allocations: Vec<OrderLine>,
}

impl From<Batch> for BatchSnapshot {
    fn from(batch: Batch) -> Self {
        let mut allocations: Vec<OrderLine> = batch.allocations.into_iter().collect();
        allocations.sort_by(|a, b| {
            (a.order_reference(), a.sku(), a.quantity())
                .cmp(&(b.order_reference(), b.sku(), b.quantity()))
        });

        Self {
            reference: batch.reference,
            sku: batch.sku,
            purchased_quantity: batch.purchased_quantity,
            eta: batch.eta,
            allocations,
        }
    }
}

impl TryFrom<BatchSnapshot> for Batch {
    type Error = DomainError;

    fn try_from(snapshot: BatchSnapshot) -> Result<Self, Self::Error> {
        let mut batch = Batch::new(
            snapshot.reference,
            snapshot.sku,
            snapshot.purchased_quantity,
            snapshot.eta,
        );

        for line in snapshot.allocations {
            if line.sku() != &batch.sku {
                return Err(DomainError::invariant(format!(
                    "batch {} holds sku {} but has a line for sku {}",
                    batch.reference,
                    batch.sku,
                    line.sku()
                )));
            }
            if !batch.is_allocated(&line) && line.quantity() > batch.available_quantity() {
                return Err(DomainError::invariant(format!(
                    "batch {} allocations exceed purchased quantity {}",
                    batch.reference, batch.purchased_quantity
                )));
            }
            batch.allocations.insert(line);
        }

        Ok(batch)
    }
}
