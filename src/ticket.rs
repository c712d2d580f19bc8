use crate::error::{require_text, DomainError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

const EVENT_NAME_LEN: std::ops::RangeInclusive<usize> = 3..=100;

/// Seats for a single event. Every mutator checks its arguments and the
/// current seat count first, so a rejected call changes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    event_name: String,
    price: Decimal,
    available_seats: u32,
}

fn ensure_positive_price(param: &'static str, price: Decimal) -> Result<()> {
    if price <= Decimal::ZERO {
        return Err(DomainError::out_of_range(
            param,
            format!("Price must be positive (got: {price})"),
        ));
    }
    Ok(())
}

fn ensure_positive_count(count: u32) -> Result<()> {
    if count == 0 {
        return Err(DomainError::out_of_range(
            "count",
            "Seat count must be positive (got: 0)",
        ));
    }
    Ok(())
}

impl Ticket {
    pub fn new(event_name: impl Into<String>, price: Decimal, available_seats: u32) -> Result<Self> {
        let event_name = event_name.into();
        require_text("event_name", &event_name, "Event name")?;
        if !EVENT_NAME_LEN.contains(&event_name.chars().count()) {
            return Err(DomainError::invalid_argument(
                "event_name",
                "Event name must be 3-100 characters",
            ));
        }
        ensure_positive_price("price", price)?;

        Ok(Self {
            event_name,
            price,
            available_seats,
        })
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn available_seats(&self) -> u32 {
        self.available_seats
    }

    pub fn book_seats(&mut self, count: u32) -> Result<()> {
        ensure_positive_count(count)?;
        if count > self.available_seats {
            return Err(DomainError::invalid_operation(format!(
                "Cannot book {count} seats - only {} available",
                self.available_seats
            )));
        }

        self.available_seats -= count;
        info!(event = %self.event_name, count, remaining = self.available_seats, "seats booked");
        Ok(())
    }

    pub fn cancel_seats(&mut self, count: u32) -> Result<()> {
        ensure_positive_count(count)?;
        let seats = self.available_seats.checked_add(count).ok_or_else(|| {
            DomainError::out_of_range("count", format!("Cancelling {count} seats overflows the venue"))
        })?;

        self.available_seats = seats;
        info!(event = %self.event_name, count, remaining = seats, "seats released");
        Ok(())
    }

    /// `percent` must be in `[0, 100]`; a 100% discount would zero the price and is refused.
    pub fn apply_discount(&mut self, percent: Decimal) -> Result<()> {
        if percent < Decimal::ZERO || percent > dec!(100) {
            return Err(DomainError::out_of_range(
                "percent",
                format!("Discount percentage must be between 0 and 100 (got: {percent})"),
            ));
        }
        let discounted = self.price * (Decimal::ONE - percent / dec!(100));
        ensure_positive_price("percent", discounted)?;

        self.price = discounted;
        info!(event = %self.event_name, %percent, price = %self.price, "discount applied");
        Ok(())
    }

    pub fn change_price(&mut self, new_price: Decimal) -> Result<()> {
        ensure_positive_price("new_price", new_price)?;
        self.price = new_price;
        info!(event = %self.event_name, price = %new_price, "price changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn conference() -> Ticket {
        Ticket::new("Tech Conference 2024", dec!(50), 100).unwrap()
    }

    #[test]
    fn test_discount_scenario() {
        let mut ticket = Ticket::new("Event", dec!(100), 100).unwrap();
        ticket.apply_discount(dec!(10)).unwrap();
        assert_eq!(ticket.price(), dec!(90));
    }

    #[test]
    fn test_event_name_rules() {
        assert!(Ticket::new("", dec!(50), 100).unwrap_err().is_argument_error());
        assert!(Ticket::new("AB", dec!(50), 100).unwrap_err().is_argument_error());
        assert!(Ticket::new("A".repeat(101), dec!(50), 100).is_err());
        assert!(Ticket::new("A".repeat(100), dec!(50), 100).is_ok());
        assert!(Ticket::new("ABC", dec!(50), 0).is_ok());
    }

    #[test]
    fn test_price_must_be_positive() {
        assert!(matches!(
            Ticket::new("Gala", Decimal::ZERO, 10),
            Err(DomainError::OutOfRange { param: "price", .. })
        ));

        let mut ticket = conference();
        assert!(ticket.change_price(dec!(-20)).is_err());
        assert!(ticket.change_price(Decimal::ZERO).is_err());
        assert_eq!(ticket.price(), dec!(50));
        ticket.change_price(dec!(75)).unwrap();
        assert_eq!(ticket.price(), dec!(75));
    }

    #[test]
    fn test_booking_guards() {
        let mut ticket = conference();
        ticket.book_seats(25).unwrap();
        assert_eq!(ticket.available_seats(), 75);

        assert!(ticket.book_seats(0).unwrap_err().is_argument_error());
        let err = ticket.book_seats(100).unwrap_err();
        assert_eq!(err.to_string(), "Cannot book 100 seats - only 75 available");
        assert_eq!(ticket.available_seats(), 75);
    }

    #[test]
    fn test_cancel_seats() {
        let mut ticket = conference();
        ticket.book_seats(10).unwrap();
        ticket.cancel_seats(4).unwrap();
        assert_eq!(ticket.available_seats(), 94);
        assert!(ticket.cancel_seats(0).is_err());

        let mut full = Ticket::new("Stadium", dec!(5), u32::MAX).unwrap();
        assert!(full.cancel_seats(1).unwrap_err().is_argument_error());
        assert_eq!(full.available_seats(), u32::MAX);
    }

    #[test]
    fn test_discount_bounds() {
        let mut ticket = conference();
        assert!(ticket.apply_discount(dec!(150)).is_err());
        assert!(ticket.apply_discount(dec!(-10)).is_err());
        assert!(ticket.apply_discount(dec!(100)).is_err());
        assert_eq!(ticket.price(), dec!(50));

        ticket.apply_discount(Decimal::ZERO).unwrap();
        assert_eq!(ticket.price(), dec!(50));
    }

    proptest! {
        #[test]
        fn prop_booking_is_exact(seats in 0u32..500, n in 0u32..600) {
            let mut ticket = Ticket::new("Concert", dec!(40), seats).unwrap();
            let before = ticket.clone();
            let result = ticket.book_seats(n);
            if n > 0 && n <= seats {
                prop_assert!(result.is_ok());
                prop_assert_eq!(ticket.available_seats(), seats - n);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(ticket, before);
            }
        }
    }
}
