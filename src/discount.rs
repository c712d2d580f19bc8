use crate::error::{require_text, DomainError, Result};
use serde::Serialize;
use tracing::debug;

fn require_percent(param: &'static str, percent: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(DomainError::out_of_range(
            param,
            format!("Percentage must be between 0 and 100 (got: {percent})"),
        ));
    }
    Ok(percent)
}

fn require_amount(param: &'static str, amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DomainError::out_of_range(
            param,
            format!("Amount must be a non-negative number (got: {amount})"),
        ));
    }
    Ok(amount)
}

// =============================================================================
// Strategy trait
// =============================================================================

/// One way of turning a price into a discount amount. The calculator only
/// ever talks to this trait, so new promotions plug in without touching it.
pub trait DiscountStrategy {
    fn calculate_discount(&self, price: f64) -> f64;

    fn description(&self) -> String;
}

// =============================================================================
// Concrete promotions
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageDiscount {
    percent: f64,
}

impl PercentageDiscount {
    pub fn new(percent: f64) -> Result<Self> {
        Ok(Self {
            percent: require_percent("percent", percent)?,
        })
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn calculate_discount(&self, price: f64) -> f64 {
        price * (self.percent / 100.0)
    }

    fn description(&self) -> String {
        format!("Percentage Discount ({}%)", self.percent)
    }
}

/// Never discounts more than the price itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAmountDiscount {
    amount: f64,
}

impl FixedAmountDiscount {
    pub fn new(amount: f64) -> Result<Self> {
        Ok(Self {
            amount: require_amount("amount", amount)?,
        })
    }
}

impl DiscountStrategy for FixedAmountDiscount {
    fn calculate_discount(&self, price: f64) -> f64 {
        self.amount.min(price)
    }

    fn description(&self) -> String {
        format!("Fixed Amount Discount (${})", self.amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BuyOneGetOneDiscount;

impl DiscountStrategy for BuyOneGetOneDiscount {
    fn calculate_discount(&self, price: f64) -> f64 {
        price / 2.0
    }

    fn description(&self) -> String {
        "Buy One Get One Discount".to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalDiscount {
    season: String,
    percent: f64,
}

impl SeasonalDiscount {
    pub fn new(season: impl Into<String>, percent: f64) -> Result<Self> {
        let season = season.into();
        require_text("season", &season, "Season")?;
        Ok(Self {
            season,
            percent: require_percent("percent", percent)?,
        })
    }
}

impl DiscountStrategy for SeasonalDiscount {
    fn calculate_discount(&self, price: f64) -> f64 {
        price * (self.percent / 100.0)
    }

    fn description(&self) -> String {
        format!("Seasonal Discount ({} {}% off)", self.season, self.percent)
    }
}

/// Flat amount off per unit; independent of the price it is applied to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulkDiscount {
    quantity: u32,
    per_item: f64,
}

impl BulkDiscount {
    pub fn new(quantity: u32, per_item: f64) -> Result<Self> {
        Ok(Self {
            quantity,
            per_item: require_amount("per_item", per_item)?,
        })
    }
}

impl DiscountStrategy for BulkDiscount {
    fn calculate_discount(&self, _price: f64) -> f64 {
        f64::from(self.quantity) * self.per_item
    }

    fn description(&self) -> String {
        format!(
            "Bulk Discount ({} items at ${} off each)",
            self.quantity, self.per_item
        )
    }
}

// =============================================================================
// Calculator
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountOutcome {
    pub description: String,
    pub discount: f64,
    pub final_price: f64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DiscountCalculator;

impl DiscountCalculator {
    pub fn new() -> Self {
        Self
    }

    /// The final price is clamped at zero.
    pub fn apply(&self, price: f64, strategy: &dyn DiscountStrategy) -> DiscountOutcome {
        let discount = strategy.calculate_discount(price);
        let final_price = (price - discount).max(0.0);
        let description = strategy.description();
        debug!(%description, price, discount, final_price, "discount evaluated");

        DiscountOutcome {
            description,
            discount,
            final_price,
        }
    }

    /// Strategy with the largest positive discount; the earliest wins a tie.
    pub fn best<'a>(
        &self,
        price: f64,
        strategies: &'a [Box<dyn DiscountStrategy>],
    ) -> Option<(&'a dyn DiscountStrategy, f64)> {
        let mut best: Option<(&'a dyn DiscountStrategy, f64)> = None;
        for strategy in strategies {
            let amount = strategy.calculate_discount(price);
            let better = match best {
                Some((_, current)) => amount > current,
                None => amount > 0.0,
            };
            if better {
                best = Some((&**strategy, amount));
            }
        }
        best
    }
}
