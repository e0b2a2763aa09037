use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{AllocationError, Result};

/// a partner-leasing plan always has exactly three installments
pub const INSTALLMENT_COUNT: usize = 3;

/// one installment of a partner-leasing repayment plan.
///
/// payment is binary: `paid_amount` is zero or exactly `amount`,
/// there is no partial-installment tracking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub ordinal: u8,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub paid_amount: Money,
    pub paid_date: Option<NaiveDate>,
}

impl Installment {
    pub fn is_paid(&self) -> bool {
        !self.paid_amount.is_zero()
    }
}

/// operator-entered override of the default even split.
///
/// the third installment is never editable: it is always the remainder,
/// so the three amounts sum to the balance exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManualSplit {
    pub first: Money,
    pub second: Option<Money>,
}

impl ManualSplit {
    pub fn first_only(first: Money) -> Self {
        Self {
            first,
            second: None,
        }
    }

    pub fn first_and_second(first: Money, second: Money) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    /// whether the override is still usable under a (possibly new) balance
    pub fn fits(&self, balance: Money) -> bool {
        self.first.is_positive()
            && self.first + self.second.unwrap_or(Money::ZERO) <= balance
    }
}

/// build the three-installment plan for a balance.
///
/// default split is an even third per installment with the rounding
/// remainder absorbed by the last; a manual first (and optionally second)
/// amount re-splits whatever is left, the third always being the remainder.
/// due dates fall one, two and three calendar months after the purchase
/// date, clamped to the last day of shorter months.
pub fn schedule(
    balance: Money,
    purchase_date: NaiveDate,
    manual: Option<&ManualSplit>,
) -> Result<[Installment; INSTALLMENT_COUNT]> {
    let amounts = split_amounts(balance, manual)?;

    let mut plan = Vec::with_capacity(INSTALLMENT_COUNT);
    for (i, amount) in amounts.into_iter().enumerate() {
        let ordinal = (i + 1) as u8;
        plan.push(Installment {
            ordinal,
            amount,
            due_date: add_months(purchase_date, ordinal as u32)?,
            paid_amount: Money::ZERO,
            paid_date: None,
        });
    }

    Ok([plan[0], plan[1], plan[2]])
}

/// split a balance into three amounts, honoring any manual override
fn split_amounts(
    balance: Money,
    manual: Option<&ManualSplit>,
) -> Result<[Money; INSTALLMENT_COUNT]> {
    let Some(manual) = manual else {
        return Ok(balance.split_three());
    };

    if !manual.first.is_positive() {
        return Err(AllocationError::InvalidInstallmentAmount {
            amount: manual.first,
        });
    }
    if manual.first > balance {
        return Err(AllocationError::InstallmentExceedsBalance {
            balance,
            requested: manual.first,
        });
    }

    match manual.second {
        Some(second) => {
            if second.is_negative() {
                return Err(AllocationError::InvalidInstallmentAmount { amount: second });
            }
            let requested = manual.first + second;
            if requested > balance {
                return Err(AllocationError::InstallmentExceedsBalance { balance, requested });
            }
            Ok([manual.first, second, balance - requested])
        }
        None => {
            let remaining = balance - manual.first;
            let second = remaining / Decimal::from(2);
            Ok([manual.first, second, remaining - second])
        }
    }
}

/// add calendar months, clamping to the last day of shorter months
/// (Jan 31 + 1 month = Feb 29 in a leap year)
pub(crate) fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| AllocationError::InvalidDate {
            message: format!("{} + {} months overflows", date, months),
        })
}
