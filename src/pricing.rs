use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{AllocationError, Result};
use crate::types::{Discount, Fees, PaymentMethod};

/// everything the pricing branch reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    pub base_price: Money,
    pub fees: Fees,
    pub payment_method: PaymentMethod,
    pub discount: Discount,
    pub interest_amount: Money,
    /// the figure the operator entered; ignored for full payment,
    /// where the down payment is forced to the total
    pub down_payment: Money,
}

/// derived pricing tuple, recomputed as a whole on every edit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DerivedTotals {
    pub total_amount: Money,
    pub down_payment: Money,
    pub balance: Money,
}

impl PricingInput {
    /// reject negative money before any recomputation runs
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("base_price", self.base_price),
            ("registration_fee", self.fees.registration_fee),
            ("document_charge", self.fees.document_charge),
            ("insurance_fee", self.fees.insurance_fee),
            ("discount", self.discount.amount),
            ("interest_amount", self.interest_amount),
            ("down_payment", self.down_payment),
        ];
        for (field, amount) in checks {
            if amount.is_negative() {
                return Err(AllocationError::NegativeAmount { field, amount });
            }
        }
        Ok(())
    }
}

/// derive `{total, down payment, balance}` for the chosen payment method.
///
/// the discount lands in different places per method: full payment and
/// other-company leasing discount the total, partner leasing discounts the
/// balance. that asymmetry is the business rule, not an accident.
pub fn compute_totals(input: &PricingInput) -> Result<DerivedTotals> {
    input.validate()?;

    let gross = input.base_price + input.fees.total();
    let discount = input.discount.effective();

    let totals = match input.payment_method {
        PaymentMethod::FullPayment => {
            let total = gross.saturating_sub(discount);
            DerivedTotals {
                total_amount: total,
                down_payment: total,
                balance: Money::ZERO,
            }
        }
        PaymentMethod::PartnerLeasing => {
            let total = gross + input.interest_amount;
            let balance = total
                .saturating_sub(input.down_payment)
                .saturating_sub(discount);
            DerivedTotals {
                total_amount: total,
                down_payment: input.down_payment,
                balance,
            }
        }
        PaymentMethod::OtherCompanyLeasing => {
            let total = gross.saturating_sub(discount);
            DerivedTotals {
                total_amount: total,
                down_payment: input.down_payment,
                balance: total.saturating_sub(input.down_payment),
            }
        }
    };

    Ok(totals)
}
