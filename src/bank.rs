use crate::error::{require_text, DomainError, Result};
use rust_decimal::Decimal;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    account_number: String,
    owner: String,
    balance: Decimal,
    lock_reason: Option<String>,
}

impl BankAccount {
    pub fn new(
        account_number: impl Into<String>,
        owner: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Self> {
        let account_number = account_number.into();
        let owner = owner.into();
        require_text("account_number", &account_number, "Account number")?;
        require_text("owner", &owner, "Owner name")?;
        if initial_balance < Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "initial_balance",
                "Initial balance cannot be negative",
            ));
        }

        Ok(Self {
            account_number,
            owner,
            balance: initial_balance,
            lock_reason: None,
        })
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn is_locked(&self) -> bool {
        self.lock_reason.is_some()
    }

    pub fn lock_reason(&self) -> Option<&str> {
        self.lock_reason.as_deref()
    }

    fn ensure_usable(&self, amount: Decimal) -> Result<()> {
        if let Some(reason) = &self.lock_reason {
            warn!(account = %self.account_number, %reason, "operation on locked account");
            return Err(DomainError::AccountLocked {
                reason: reason.clone(),
            });
        }
        if amount <= Decimal::ZERO {
            return Err(DomainError::InvalidAmount { amount });
        }
        Ok(())
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        self.ensure_usable(amount)?;
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            DomainError::out_of_range(
                "amount",
                format!("Deposit of ${amount} would overflow the balance"),
            )
        })?;
        info!(account = %self.account_number, %amount, balance = %self.balance, "deposit");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        self.ensure_usable(amount)?;
        if amount > self.balance {
            return Err(DomainError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        info!(account = %self.account_number, %amount, balance = %self.balance, "withdrawal");
        Ok(())
    }

    pub fn lock(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        info!(account = %self.account_number, %reason, "account locked");
        self.lock_reason = Some(reason);
    }

    pub fn unlock(&mut self) {
        self.lock_reason = None;
        info!(account = %self.account_number, "account unlocked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn alice() -> BankAccount {
        BankAccount::new("12345", "Alice", dec!(1000)).unwrap()
    }

    #[test]
    fn test_constructor_guards() {
        assert!(BankAccount::new("", "Alice", dec!(1)).unwrap_err().is_argument_error());
        assert!(BankAccount::new("1", " ", dec!(1)).unwrap_err().is_argument_error());
        assert!(BankAccount::new("1", "Alice", dec!(-1)).unwrap_err().is_argument_error());
        assert!(BankAccount::new("1", "Alice", Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_insufficient_funds_carries_context() {
        let mut account = alice();
        account.deposit(dec!(500)).unwrap();

        match account.withdraw(dec!(2000)) {
            Err(DomainError::InsufficientFunds { balance, requested }) => {
                assert_eq!(balance, dec!(1500));
                assert_eq!(requested, dec!(2000));
            }
            other => panic!("expected InsufficientFunds, got {other:?}"),
        }
        assert_eq!(account.balance(), dec!(1500));
    }

    #[test]
    fn test_invalid_amounts() {
        let mut account = alice();
        assert_eq!(
            account.withdraw(dec!(-50)),
            Err(DomainError::InvalidAmount { amount: dec!(-50) })
        );
        assert!(account.deposit(Decimal::ZERO).is_err());
        assert_eq!(account.balance(), dec!(1000));
    }

    #[test]
    fn test_lock_blocks_everything_until_unlocked() {
        let mut account = alice();
        account.lock("fraud detected");
        assert!(account.is_locked());
        assert_eq!(account.lock_reason(), Some("fraud detected"));

        let err = account.withdraw(dec!(500)).unwrap_err();
        assert_eq!(
            err,
            DomainError::AccountLocked {
                reason: "fraud detected".into()
            }
        );
        // Lock is checked before the amount.
        assert!(matches!(
            account.deposit(dec!(-1)),
            Err(DomainError::AccountLocked { .. })
        ));

        account.unlock();
        account.withdraw(dec!(500)).unwrap();
        assert_eq!(account.balance(), dec!(500));
        assert_eq!(account.lock_reason(), None);
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let mut account = alice();
        let err = account.deposit(Decimal::MAX).unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange { param: "amount", .. }));
        assert_eq!(account.balance(), dec!(1000));

        let mut account = BankAccount::new("9", "Max", Decimal::MAX).unwrap();
        assert!(account.deposit(dec!(1)).is_err());
        account.withdraw(dec!(1)).unwrap();
        account.deposit(dec!(1)).unwrap();
        assert_eq!(account.balance(), Decimal::MAX);
    }
}
