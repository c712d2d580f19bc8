use crate::config::OrderPolicy;
use crate::error::{require_text, DomainError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/* ============================================================
 * Status enum and transition table
 * ============================================================
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Statuses reachable in a single step from `self`.
    pub fn allowed_transitions(self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Processing, OrderStatus::Cancelled],
            OrderStatus::Processing => &[OrderStatus::Shipped, OrderStatus::Cancelled],
            OrderStatus::Shipped => &[OrderStatus::Delivered],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Items and discount can only change before the order leaves the warehouse.
    pub fn allows_modification(self) -> bool {
        !matches!(
            self,
            OrderStatus::Shipped | OrderStatus::Delivered | OrderStatus::Cancelled
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ============================================================
 * Order aggregate
 * ============================================================
 */

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub name: String,
    pub price: Decimal,
}

/// Snapshot of an order with every computed figure filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub order_id: u32,
    pub customer: String,
    pub status: OrderStatus,
    pub item_count: usize,
    pub item_total: Decimal,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
    pub shipping_cost: Decimal,
    pub final_total: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    order_id: u32,
    customer: String,
    items: Vec<LineItem>,
    discount_percent: Decimal,
    status: OrderStatus,
    policy: OrderPolicy,
}

impl Order {
    pub fn new(order_id: u32, customer: impl Into<String>) -> Result<Self> {
        Self::with_policy(order_id, customer, OrderPolicy::default())
    }

    pub fn with_policy(
        order_id: u32,
        customer: impl Into<String>,
        policy: OrderPolicy,
    ) -> Result<Self> {
        let customer = customer.into();
        if order_id == 0 {
            return Err(DomainError::invalid_argument(
                "order_id",
                "Order ID must be positive",
            ));
        }
        require_text("customer", &customer, "Customer name")?;

        debug!(order_id, %customer, "order created");
        Ok(Self {
            order_id,
            customer,
            items: Vec::new(),
            discount_percent: Decimal::ZERO,
            status: OrderStatus::Pending,
            policy,
        })
    }

    pub fn order_id(&self) -> u32 {
        self.order_id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    pub fn policy(&self) -> &OrderPolicy {
        &self.policy
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn item_total(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn discount_amount(&self) -> Decimal {
        self.item_total() * (self.discount_percent / dec!(100))
    }

    pub fn shipping_cost(&self) -> Decimal {
        if self.item_total() >= self.policy.free_shipping_threshold {
            Decimal::ZERO
        } else {
            self.policy.flat_shipping_fee
        }
    }

    pub fn final_total(&self) -> Decimal {
        self.item_total() - self.discount_amount() + self.shipping_cost()
    }

    pub fn can_modify(&self) -> bool {
        self.status.allows_modification()
    }

    fn ensure_modifiable(&self, action: &str) -> Result<()> {
        if !self.can_modify() {
            warn!(order_id = self.order_id, status = %self.status, action, "order is locked");
            return Err(DomainError::invalid_operation(format!(
                "Cannot {action} - order is {}",
                self.status.as_str().to_lowercase()
            )));
        }
        Ok(())
    }

    pub fn add_item(&mut self, name: impl Into<String>, price: Decimal) -> Result<()> {
        let name = name.into();
        self.ensure_modifiable("add items")?;
        require_text("name", &name, "Item name")?;
        if price <= Decimal::ZERO {
            return Err(DomainError::out_of_range(
                "price",
                format!("Item price must be positive (got: {price})"),
            ));
        }
        if self.items.len() >= self.policy.max_items {
            return Err(DomainError::invalid_operation(format!(
                "Cannot add item - order limit is {} items",
                self.policy.max_items
            )));
        }

        // The running total plus the flat fee must stay representable so the
        // computed figures never overflow.
        self.item_total()
            .checked_add(price)
            .and_then(|total| total.checked_add(self.policy.flat_shipping_fee))
            .ok_or_else(|| {
                DomainError::out_of_range(
                    "price",
                    format!("Item price {price} would overflow the order total"),
                )
            })?;

        info!(order_id = self.order_id, item = %name, %price, "item added");
        self.items.push(LineItem { name, price });
        Ok(())
    }

    /// Removes the first item called `name`. The last item can never be removed.
    pub fn remove_item(&mut self, name: &str) -> Result<()> {
        self.ensure_modifiable("remove items")?;
        if self.items.len() <= 1 {
            return Err(DomainError::invalid_operation(
                "Cannot remove item - order must have at least 1 item",
            ));
        }
        let index = self
            .items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| DomainError::invalid_operation(format!("Item '{name}' not found")))?;

        self.items.remove(index);
        info!(order_id = self.order_id, item = name, "item removed");
        Ok(())
    }

    /// Replaces (does not stack) the discount percentage.
    pub fn apply_discount(&mut self, percent: Decimal) -> Result<()> {
        self.ensure_modifiable("apply discount")?;
        let ceiling = self.policy.max_discount_percent;
        if percent < Decimal::ZERO || percent > ceiling {
            return Err(DomainError::out_of_range(
                "percent",
                format!("Discount must be between 0 and {ceiling}% (got: {percent})"),
            ));
        }

        self.discount_percent = percent;
        info!(
            order_id = self.order_id,
            %percent,
            amount = %self.discount_amount(),
            "discount applied"
        );
        Ok(())
    }

    pub fn update_status(&mut self, next: OrderStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            warn!(order_id = self.order_id, from = %self.status, to = %next, "transition rejected");
            return Err(DomainError::invalid_operation(format!(
                "Cannot transition from {} to {}",
                self.status, next
            )));
        }

        info!(order_id = self.order_id, from = %self.status, to = %next, "status changed");
        self.status = next;
        Ok(())
    }

    /// Like `update_status(Cancelled)` but with messages that tell a shipped
    /// order apart from one that is already cancelled.
    pub fn cancel(&mut self) -> Result<()> {
        match self.status {
            OrderStatus::Shipped | OrderStatus::Delivered => Err(
                DomainError::invalid_operation("Cannot cancel - order already shipped"),
            ),
            OrderStatus::Cancelled => {
                Err(DomainError::invalid_operation("Order already cancelled"))
            }
            OrderStatus::Pending | OrderStatus::Processing => {
                self.update_status(OrderStatus::Cancelled)
            }
        }
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.order_id,
            customer: self.customer.clone(),
            status: self.status,
            item_count: self.item_count(),
            item_total: self.item_total(),
            discount_percent: self.discount_percent,
            discount_amount: self.discount_amount(),
            shipping_cost: self.shipping_cost(),
            final_total: self.final_total(),
        }
    }
}

/* ============================================================
 * Tests
 * ============================================================
 */
