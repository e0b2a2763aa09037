use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::allocation::Allocation;
use crate::config::EngineConfig;
use crate::types::AllocationId;

/// cheque reminder state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderStatus {
    Pending,
    Released,
}

/// a cheque-release reminder, derived per allocation on read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChequeReminder {
    pub allocation_id: AllocationId,
    pub customer_name: String,
    pub release_date: NaiveDate,
    pub status: ReminderStatus,
    pub released_date: Option<NaiveDate>,
}

impl ChequeReminder {
    /// past the release date and still pending
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == ReminderStatus::Pending && today > self.release_date
    }

    pub fn days_overdue(&self, today: NaiveDate) -> Option<i64> {
        self.is_overdue(today)
            .then(|| (today - self.release_date).num_days())
    }

    pub fn days_until_release(&self, today: NaiveDate) -> Option<i64> {
        (self.status == ReminderStatus::Pending && today <= self.release_date)
            .then(|| (self.release_date - today).num_days())
    }
}

/// derive cheque-release reminders over the full record set.
///
/// a record qualifies once it carries a down payment; the release date is
/// a fixed offset from the down-payment date (recorded at allocation
/// creation, so the purchase date anchors it). with `include_released`
/// false the day-to-day view drops released cheques entirely; the review
/// tab and export pass true to see both. ordered by release date, stable.
pub fn reminders(
    records: &[Allocation],
    config: &EngineConfig,
    include_released: bool,
) -> Vec<ChequeReminder> {
    let offset = Duration::days(config.cheque_release_offset_days);

    let mut result: Vec<ChequeReminder> = records
        .iter()
        .filter(|r| r.down_payment.is_positive())
        .map(|record| {
            let status = if record.cheque_released_on.is_some() {
                ReminderStatus::Released
            } else {
                ReminderStatus::Pending
            };
            ChequeReminder {
                allocation_id: record.id,
                customer_name: record.customer.full_name.clone(),
                release_date: record.purchase_date + offset,
                status,
                released_date: record.cheque_released_on,
            }
        })
        .filter(|r| include_released || r.status == ReminderStatus::Pending)
        .collect();

    result.sort_by_key(|r| r.release_date);
    result
}
