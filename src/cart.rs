use crate::config::CartPolicy;
use crate::error::{require_text, DomainError, Result};
use rust_decimal::Decimal;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
struct CartLine {
    name: String,
    price: Decimal,
}

/// A cart that holds at most `max_items` lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingCart {
    customer: String,
    max_items: usize,
    items: Vec<CartLine>,
}

impl ShoppingCart {
    pub fn new(customer: impl Into<String>, max_items: usize) -> Result<Self> {
        let customer = customer.into();
        if max_items == 0 {
            return Err(DomainError::invalid_argument(
                "max_items",
                "Max items must be positive",
            ));
        }
        require_text("customer", &customer, "Customer name")?;

        Ok(Self {
            customer,
            max_items,
            items: Vec::with_capacity(max_items),
        })
    }

    pub fn with_default_capacity(customer: impl Into<String>, policy: &CartPolicy) -> Result<Self> {
        Self::new(customer, policy.default_capacity)
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(|line| line.price).sum()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_items
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(|line| line.name.as_str()).collect()
    }

    /// Zero-priced items are allowed (freebies); negative prices are not.
    pub fn add_item(&mut self, name: impl Into<String>, price: Decimal) -> Result<()> {
        let name = name.into();
        require_text("name", &name, "Item name")?;
        if price < Decimal::ZERO {
            return Err(DomainError::out_of_range("price", "Price cannot be negative"));
        }
        if self.is_full() {
            return Err(DomainError::invalid_operation(format!(
                "Cannot add item - cart is full ({0}/{0})",
                self.max_items
            )));
        }

        if self.total_price().checked_add(price).is_none() {
            return Err(DomainError::out_of_range(
                "price",
                format!("Price {price} would overflow the cart total"),
            ));
        }

        info!(customer = %self.customer, item = %name, %price, "added to cart");
        self.items.push(CartLine { name, price });
        Ok(())
    }

    pub fn remove_item(&mut self, name: &str) -> Result<()> {
        require_text("name", name, "Item name")?;
        let index = self
            .items
            .iter()
            .position(|line| line.name == name)
            .ok_or_else(|| {
                DomainError::invalid_operation(format!("Item '{name}' not found in cart"))
            })?;

        self.items.remove(index);
        info!(customer = %self.customer, item = name, "removed from cart");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
        info!(customer = %self.customer, "cart cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_capacity_limit() {
        let mut cart = ShoppingCart::new("Alice", 2).unwrap();
        cart.add_item("Laptop", dec!(999.99)).unwrap();
        cart.add_item("Mouse", dec!(29.99)).unwrap();
        assert!(cart.is_full());

        let before = cart.clone();
        let err = cart.add_item("Extra Item", dec!(50)).unwrap_err();
        assert_eq!(err.to_string(), "Cannot add item - cart is full (2/2)");
        assert_eq!(cart, before);
        assert_eq!(cart.total_price(), dec!(1029.98));
    }

    #[test]
    fn test_constructor_guards() {
        assert!(ShoppingCart::new("Alice", 0).unwrap_err().is_argument_error());
        assert!(ShoppingCart::new("", 3).unwrap_err().is_argument_error());

        let cart = ShoppingCart::with_default_capacity("Alice", &CartPolicy::default()).unwrap();
        assert_eq!(cart.max_items(), 10);
    }

    #[test]
    fn test_add_item_guards() {
        let mut cart = ShoppingCart::new("Alice", 5).unwrap();
        assert!(matches!(
            cart.add_item("", dec!(50)),
            Err(DomainError::InvalidArgument { .. })
        ));
        assert!(matches!(
            cart.add_item("Item", dec!(-10)),
            Err(DomainError::OutOfRange { .. })
        ));
        cart.add_item("Sticker", Decimal::ZERO).unwrap();
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_total_overflow_is_rejected() {
        let mut cart = ShoppingCart::new("Alice", 3).unwrap();
        cart.add_item("Yacht", Decimal::MAX).unwrap();

        let before = cart.clone();
        let err = cart.add_item("Dinghy", dec!(1)).unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange { param: "price", .. }));
        assert_eq!(cart, before);

        cart.add_item("Sticker", Decimal::ZERO).unwrap();
        assert_eq!(cart.total_price(), Decimal::MAX);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = ShoppingCart::new("Alice", 5).unwrap();
        cart.add_item("Laptop", dec!(999.99)).unwrap();
        cart.add_item("Mouse", dec!(29.99)).unwrap();

        assert!(cart.remove_item(" ").unwrap_err().is_argument_error());
        assert!(cart.remove_item("Webcam").unwrap_err().is_invalid_operation());
        cart.remove_item("Laptop").unwrap();
        assert_eq!(cart.item_names(), vec!["Mouse"]);

        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_failed_adds_leave_cart_untouched(
            capacity in 1usize..8,
            prices in prop::collection::vec(-500i64..5_000, 0..16),
        ) {
            let mut cart = ShoppingCart::new("Prop", capacity).unwrap();
            for (i, cents) in prices.into_iter().enumerate() {
                let before = cart.clone();
                match cart.add_item(format!("item-{i}"), Decimal::new(cents, 2)) {
                    Ok(()) => prop_assert_eq!(cart.item_count(), before.item_count() + 1),
                    Err(_) => prop_assert_eq!(&cart, &before),
                }
                prop_assert!(cart.item_count() <= capacity);
            }
            if cart.is_full() {
                prop_assert!(cart.add_item("overflow", Decimal::ONE).is_err());
            }
        }
    }
}
