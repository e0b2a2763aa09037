use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::allocation::Allocation;
use crate::decimal::Money;
use crate::errors::{AllocationError, Result};
use crate::schedule::{Installment, INSTALLMENT_COUNT};

/// resolve a 1-based ordinal into a plan index
pub(crate) fn ordinal_index(
    plan: &[Installment; INSTALLMENT_COUNT],
    ordinal: u8,
) -> Result<usize> {
    plan.iter()
        .position(|i| i.ordinal == ordinal)
        .ok_or(AllocationError::InvalidOrdinal { ordinal })
}

/// set one installment's paid state.
///
/// paid sets `paid_amount` to the full installment amount and stamps the
/// date; unpaid resets both. there is no partial payment and no ordering
/// constraint between ordinals. idempotent by construction.
pub fn mark(
    plan: &mut [Installment; INSTALLMENT_COUNT],
    ordinal: u8,
    paid: bool,
    on: NaiveDate,
) -> Result<Installment> {
    let index = ordinal_index(plan, ordinal)?;
    let installment = &mut plan[index];

    if paid {
        installment.paid_amount = installment.amount;
        installment.paid_date = Some(on);
    } else {
        installment.paid_amount = Money::ZERO;
        installment.paid_date = None;
    }

    Ok(*installment)
}

/// cross-record collection figures, always re-derived from the ledger
/// rather than cached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CollectionSummary {
    pub total_scheduled: Money,
    pub total_collected: Money,
    pub total_outstanding: Money,
    pub installments_paid: u32,
    pub installments_unpaid: u32,
}

impl CollectionSummary {
    pub fn from_allocations(records: &[Allocation]) -> Self {
        let mut summary = Self::default();

        for record in records {
            let Some(plan) = &record.installments else {
                continue;
            };
            for installment in plan {
                summary.total_scheduled += installment.amount;
                summary.total_collected += installment.paid_amount;
                if installment.is_paid() {
                    summary.installments_paid += 1;
                } else {
                    summary.installments_unpaid += 1;
                }
            }
        }

        summary.total_outstanding = summary
            .total_scheduled
            .saturating_sub(summary.total_collected);
        summary
    }
}
