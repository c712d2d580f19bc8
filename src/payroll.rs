use crate::error::{require_text, DomainError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/* ============================================================
 * Shared employee data and the pay trait
 * ============================================================
 */

/// Fields every kind of employee carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInfo {
    name: String,
    employee_id: u32,
}

impl EmployeeInfo {
    pub fn new(name: impl Into<String>, employee_id: u32) -> Result<Self> {
        let name = name.into();
        require_text("name", &name, "Employee name")?;
        if employee_id == 0 {
            return Err(DomainError::invalid_argument(
                "employee_id",
                "Employee ID must be positive",
            ));
        }
        Ok(Self { name, employee_id })
    }
}

pub trait Pay {
    fn info(&self) -> &EmployeeInfo;

    /// Pay for one month.
    fn calculate_pay(&self) -> Result<Decimal>;

    fn name(&self) -> &str {
        &self.info().name
    }

    fn employee_id(&self) -> u32 {
        self.info().employee_id
    }

    fn display_info(&self) -> Result<String> {
        Ok(format!(
            "Name: {}\nID: {}\nPay: ${:.2}",
            self.name(),
            self.employee_id(),
            self.calculate_pay()?
        ))
    }
}

fn require_non_negative(param: &'static str, value: Decimal) -> Result<Decimal> {
    if value < Decimal::ZERO {
        return Err(DomainError::out_of_range(
            param,
            format!("Value cannot be negative (got: {value})"),
        ));
    }
    Ok(value)
}

fn overflow(name: &str) -> DomainError {
    DomainError::invalid_operation(format!("Pay for {name} is too large to represent"))
}

/* ============================================================
 * Employee kinds
 * ============================================================
 */

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEmployee {
    info: EmployeeInfo,
    hours_worked: Decimal,
    hourly_rate: Decimal,
}

impl HourlyEmployee {
    pub fn new(info: EmployeeInfo, hours_worked: Decimal, hourly_rate: Decimal) -> Result<Self> {
        Ok(Self {
            info,
            hours_worked: require_non_negative("hours_worked", hours_worked)?,
            hourly_rate: require_non_negative("hourly_rate", hourly_rate)?,
        })
    }
}

impl Pay for HourlyEmployee {
    fn info(&self) -> &EmployeeInfo {
        &self.info
    }

    fn calculate_pay(&self) -> Result<Decimal> {
        self.hours_worked
            .checked_mul(self.hourly_rate)
            .ok_or_else(|| overflow(self.name()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalariedEmployee {
    info: EmployeeInfo,
    annual_salary: Decimal,
}

impl SalariedEmployee {
    pub fn new(info: EmployeeInfo, annual_salary: Decimal) -> Result<Self> {
        Ok(Self {
            info,
            annual_salary: require_non_negative("annual_salary", annual_salary)?,
        })
    }
}

impl Pay for SalariedEmployee {
    fn info(&self) -> &EmployeeInfo {
        &self.info
    }

    fn calculate_pay(&self) -> Result<Decimal> {
        Ok(self.annual_salary / dec!(12))
    }
}

/// Base salary plus a cut of sales. The rate is a fraction, `0.15` for 15%.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionEmployee {
    info: EmployeeInfo,
    base_salary: Decimal,
    sales_amount: Decimal,
    commission_rate: Decimal,
}

impl CommissionEmployee {
    pub fn new(
        info: EmployeeInfo,
        base_salary: Decimal,
        sales_amount: Decimal,
        commission_rate: Decimal,
    ) -> Result<Self> {
        if commission_rate < Decimal::ZERO || commission_rate > Decimal::ONE {
            return Err(DomainError::out_of_range(
                "commission_rate",
                format!("Commission rate must be between 0 and 1 (got: {commission_rate})"),
            ));
        }
        Ok(Self {
            info,
            base_salary: require_non_negative("base_salary", base_salary)?,
            sales_amount: require_non_negative("sales_amount", sales_amount)?,
            commission_rate,
        })
    }
}

impl Pay for CommissionEmployee {
    fn info(&self) -> &EmployeeInfo {
        &self.info
    }

    fn calculate_pay(&self) -> Result<Decimal> {
        self.sales_amount
            .checked_mul(self.commission_rate)
            .and_then(|commission| self.base_salary.checked_add(commission))
            .ok_or_else(|| overflow(self.name()))
    }
}

/* ============================================================
 * Payroll
 * ============================================================
 */

#[derive(Default)]
pub struct Payroll {
    employees: Vec<Box<dyn Pay>>,
}

impl Payroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hire(&mut self, employee: Box<dyn Pay>) {
        debug!(employee_id = employee.employee_id(), name = employee.name(), "hired");
        self.employees.push(employee);
    }

    pub fn employees(&self) -> impl Iterator<Item = &dyn Pay> {
        self.employees.iter().map(|employee| &**employee)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn total(&self) -> Result<Decimal> {
        self.employees.iter().try_fold(Decimal::ZERO, |total, employee| {
            total
                .checked_add(employee.calculate_pay()?)
                .ok_or_else(|| DomainError::invalid_operation("Total payroll is too large to represent"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Payroll {
        let mut payroll = Payroll::new();
        payroll.hire(Box::new(
            HourlyEmployee::new(
                EmployeeInfo::new("Alice Johnson", 101).unwrap(),
                dec!(160),
                dec!(20),
            )
            .unwrap(),
        ));
        payroll.hire(Box::new(
            SalariedEmployee::new(EmployeeInfo::new("Bob Smith", 102).unwrap(), dec!(50000))
                .unwrap(),
        ));
        payroll.hire(Box::new(
            CommissionEmployee::new(
                EmployeeInfo::new("Carol White", 103).unwrap(),
                dec!(2000),
                dec!(10000),
                dec!(0.15),
            )
            .unwrap(),
        ));
        payroll
    }

    #[test]
    fn test_each_kind_of_pay() {
        let payroll = staff();
        let pay: Vec<Decimal> = payroll
            .employees()
            .map(|employee| employee.calculate_pay().unwrap().round_dp(2))
            .collect();
        assert_eq!(pay, vec![dec!(3200), dec!(4166.67), dec!(3500)]);
    }

    #[test]
    fn test_total_payroll() {
        let payroll = staff();
        assert_eq!(payroll.len(), 3);
        assert_eq!(payroll.total().unwrap().round_dp(2), dec!(10866.67));
        assert_eq!(Payroll::new().total().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_display_info() {
        let payroll = staff();
        let first = payroll.employees().next().unwrap();
        assert_eq!(
            first.display_info().unwrap(),
            "Name: Alice Johnson\nID: 101\nPay: $3200.00"
        );
    }

    #[test]
    fn test_constructor_guards() {
        assert!(EmployeeInfo::new(" ", 1).unwrap_err().is_argument_error());
        assert!(EmployeeInfo::new("Dan", 0).unwrap_err().is_argument_error());

        let info = EmployeeInfo::new("Dan", 7).unwrap();
        assert!(HourlyEmployee::new(info.clone(), dec!(-1), dec!(20)).is_err());
        assert!(SalariedEmployee::new(info.clone(), dec!(-50000)).is_err());
        assert!(CommissionEmployee::new(info.clone(), dec!(1), dec!(1), dec!(1.5)).is_err());
        assert!(CommissionEmployee::new(info, dec!(1), dec!(1), dec!(1)).is_ok());
    }

    #[test]
    fn test_overflowing_pay_is_an_error() {
        let huge = HourlyEmployee::new(
            EmployeeInfo::new("Eve", 9).unwrap(),
            Decimal::MAX,
            dec!(2),
        )
        .unwrap();
        assert!(huge.calculate_pay().unwrap_err().is_invalid_operation());

        let mut payroll = Payroll::new();
        payroll.hire(Box::new(huge));
        assert!(payroll.total().is_err());
    }
}
