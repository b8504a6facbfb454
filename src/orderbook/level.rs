//! Price level: a FIFO queue of resting orders threaded through the order arena.
//!
//! Orders live in a [`Slab`] owned by the book. A level only records the
//! handles of its first and last orders; each arena node links to its
//! neighbours, so appending and unlinking any order are O(1).

use super::order::{Order, Price, Quantity, Volume};
use slab::Slab;

/// Stable position of an order in the arena
pub(crate) type Handle = usize;

/// Arena slot for a resting order
#[derive(Debug, Clone)]
pub(crate) struct OrderNode {
    pub(crate) order: Order,
    /// Arrival order across the whole book
    pub(crate) sequence: u64,
    prev: Option<Handle>,
    next: Option<Handle>,
}

impl OrderNode {
    pub(crate) fn new(order: Order, sequence: u64) -> Self {
        Self {
            order,
            sequence,
            prev: None,
            next: None,
        }
    }
}

/// All resting orders at one price on one side, oldest first
#[derive(Debug, Clone)]
pub(crate) struct PriceLevel {
    price: Price,
    head: Option<Handle>,
    tail: Option<Handle>,
    order_count: usize,
    total_quantity: Volume,
}

impl PriceLevel {
    pub(crate) fn new(price: Price) -> Self {
        Self {
            price,
            head: None,
            tail: None,
            order_count: 0,
            total_quantity: 0,
        }
    }

    pub(crate) fn price(&self) -> Price {
        self.price
    }

    /// Handle of the order with time priority
    pub(crate) fn front(&self) -> Option<Handle> {
        self.head
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    pub(crate) fn order_count(&self) -> usize {
        self.order_count
    }

    /// Sum of remaining quantities at this level
    pub(crate) fn total_quantity(&self) -> Volume {
        self.total_quantity
    }

    /// Append the order at `handle` behind every order already queued
    pub(crate) fn push_back(&mut self, arena: &mut Slab<OrderNode>, handle: Handle) {
        let prev_tail = self.tail;
        let node = &mut arena[handle];
        node.prev = prev_tail;
        node.next = None;
        let quantity = node.order.remaining_quantity();

        match prev_tail {
            Some(tail) => arena[tail].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.order_count += 1;
        self.total_quantity += Volume::from(quantity);
    }

    /// Detach the order at `handle` from the queue.
    ///
    /// The arena slot is left in place; the caller frees it.
    pub(crate) fn unlink(&mut self, arena: &mut Slab<OrderNode>, handle: Handle) {
        let (prev, next, quantity) = {
            let node = &arena[handle];
            (node.prev, node.next, node.order.remaining_quantity())
        };

        match prev {
            Some(p) => arena[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => arena[n].prev = prev,
            None => self.tail = prev,
        }

        let node = &mut arena[handle];
        node.prev = None;
        node.next = None;

        self.order_count -= 1;
        self.total_quantity = self
            .total_quantity
            .saturating_sub(Volume::from(quantity));
    }

    /// Account for `quantity` executed against one of this level's orders
    pub(crate) fn record_fill(&mut self, quantity: Quantity) {
        self.total_quantity = self
            .total_quantity
            .saturating_sub(Volume::from(quantity));
    }

    /// Handles in time priority
    pub(crate) fn iter<'a>(&self, arena: &'a Slab<OrderNode>) -> LevelIter<'a> {
        LevelIter {
            arena,
            cursor: self.head,
        }
    }
}

/// FIFO walk over one level's handles
pub(crate) struct LevelIter<'a> {
    arena: &'a Slab<OrderNode>,
    cursor: Option<Handle>,
}

impl Iterator for LevelIter<'_> {
    type Item = Handle;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        self.cursor = self.arena[handle].next;
        Some(handle)
    }
}
