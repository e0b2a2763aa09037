use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::allocation::Allocation;
use crate::decimal::Money;
use crate::schedule::{Installment, INSTALLMENT_COUNT};
use crate::types::{AllocationId, Customer, Vehicle};

/// one actionable installment on the follow-up worklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueItem {
    pub allocation_id: AllocationId,
    pub customer: Customer,
    pub vehicle: Vehicle,
    pub ordinal: u8,
    pub amount: Money,
    pub due_date: NaiveDate,
    /// days until the due date; negative when overdue
    pub days_remaining: i64,
}

impl DueItem {
    pub fn is_overdue(&self) -> bool {
        self.days_remaining < 0
    }

    pub fn days_overdue(&self) -> Option<i64> {
        self.is_overdue().then(|| -self.days_remaining)
    }
}

/// the single next-actionable installment of a plan.
///
/// prefers the first unpaid installment that is not yet due; when every
/// unpaid installment is already overdue, falls back to the earliest
/// unpaid one, so an eligible record always surfaces exactly one item
/// until it is fully paid.
fn next_relevant(
    plan: &[Installment; INSTALLMENT_COUNT],
    today: NaiveDate,
) -> Option<&Installment> {
    plan.iter()
        .find(|i| !i.is_paid() && i.due_date >= today)
        .or_else(|| plan.iter().find(|i| !i.is_paid()))
}

/// derive the cross-record worklist of next-due installments.
///
/// only partner-leasing records with an outstanding balance contribute;
/// ordering is most-overdue first (ascending days remaining), ties keep
/// input order.
pub fn due_worklist(records: &[Allocation], today: NaiveDate) -> Vec<DueItem> {
    let mut items: Vec<DueItem> = records
        .iter()
        .filter(|r| r.payment_method.produces_schedule() && r.balance.is_positive())
        .filter_map(|record| {
            let plan = record.installments.as_ref()?;
            let installment = next_relevant(plan, today)?;
            Some(DueItem {
                allocation_id: record.id,
                customer: record.customer.clone(),
                vehicle: record.vehicle.clone(),
                ordinal: installment.ordinal,
                amount: installment.amount,
                due_date: installment.due_date,
                days_remaining: (installment.due_date - today).num_days(),
            })
        })
        .collect();

    items.sort_by_key(|item| item.days_remaining);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::AllocationInput;
    use crate::events::EventStore;
    use crate::types::{Discount, Fees, PaymentMethod};
    use chrono::{TimeZone, Utc};
    use hourglass_rs::{SafeTimeProvider, TimeSource};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        ))
    }

    fn partner_record(name: &str, purchase_date: NaiveDate) -> Allocation {
        let time = test_time();
        let mut events = EventStore::new();
        let input = AllocationInput {
            customer: Customer {
                full_name: name.to_string(),
                nic: "881234567V".to_string(),
                contact_no: "0711111111".to_string(),
                address: "Main Street, Matara".to_string(),
            },
            vehicle: Some(Vehicle {
                vehicle_type: "Every Buddy Van".to_string(),
                base_price: Money::from_major(400_000),
                engine_no: "EN-2".to_string(),
                chassis_no: "CH-2".to_string(),
            }),
            purchase_date,
            payment_method: PaymentMethod::PartnerLeasing,
            fees: Fees::default(),
            discount: Discount::default(),
            interest_amount: Money::ZERO,
            down_payment: Money::from_major(100_000),
            manual_split: None,
            leasing_officer: None,
        };
        Allocation::create(input, &time, &mut events).unwrap()
    }

    fn full_payment_record() -> Allocation {
        let time = test_time();
        let mut events = EventStore::new();
        let input = AllocationInput {
            customer: Customer {
                full_name: "Cash Buyer".to_string(),
                nic: "771234567V".to_string(),
                contact_no: "0722222222".to_string(),
                address: "Hill Street, Kandy".to_string(),
            },
            vehicle: Some(Vehicle {
                vehicle_type: "Dimo Batta".to_string(),
                base_price: Money::from_major(300_000),
                engine_no: "EN-3".to_string(),
                chassis_no: "CH-3".to_string(),
            }),
            purchase_date: date(2023, 12, 1),
            payment_method: PaymentMethod::FullPayment,
            fees: Fees::default(),
            discount: Discount::default(),
            interest_amount: Money::ZERO,
            down_payment: Money::ZERO,
            manual_split: None,
            leasing_officer: None,
        };
        Allocation::create(input, &time, &mut events).unwrap()
    }

    #[test]
    fn test_picks_first_unpaid_future_installment() {
        // due dates: Jan 1, Feb 1, Mar 1
        let record = partner_record("A", date(2023, 12, 1));
        let items = due_worklist(&[record], date(2024, 1, 20));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].ordinal, 2);
        assert_eq!(items[0].due_date, date(2024, 2, 1));
        assert_eq!(items[0].days_remaining, 12);
        assert!(!items[0].is_overdue());
    }

    #[test]
    fn test_fallback_surfaces_most_overdue_unpaid() {
        // all due dates in the past: the earliest unpaid wins, not the latest
        let record = partner_record("A", date(2023, 12, 1));
        let items = due_worklist(&[record], date(2024, 4, 15));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].ordinal, 1);
        assert_eq!(items[0].due_date, date(2024, 1, 1));
        assert_eq!(items[0].days_overdue(), Some(105));
    }

    #[test]
    fn test_fallback_skips_paid_ordinals() {
        let time = test_time();
        let mut events = EventStore::new();
        let mut record = partner_record("A", date(2023, 12, 1));
        record
            .set_installment_paid(1, true, &time, &mut events)
            .unwrap();

        let items = due_worklist(&[record], date(2024, 4, 15));
        assert_eq!(items[0].ordinal, 2);
    }

    #[test]
    fn test_fully_paid_record_contributes_nothing() {
        let time = test_time();
        let mut events = EventStore::new();
        let mut record = partner_record("A", date(2023, 12, 1));
        for ordinal in 1..=3 {
            record
                .set_installment_paid(ordinal, true, &time, &mut events)
                .unwrap();
        }

        assert!(due_worklist(&[record], date(2024, 4, 15)).is_empty());
    }

    #[test]
    fn test_non_partner_records_ineligible() {
        let items = due_worklist(&[full_payment_record()], date(2024, 1, 1));
        assert!(items.is_empty());
    }

    #[test]
    fn test_sorted_most_overdue_first() {
        let overdue = partner_record("Overdue", date(2023, 10, 1)); // first due Nov 1
        let upcoming = partner_record("Upcoming", date(2024, 1, 10)); // first due Feb 10
        let items = due_worklist(&[upcoming, overdue], date(2024, 1, 20));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].customer.full_name, "Overdue");
        assert!(items[0].days_remaining < 0);
        assert_eq!(items[1].customer.full_name, "Upcoming");
        assert_eq!(items[1].days_remaining, 21);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let first = partner_record("First", date(2024, 1, 5));
        let second = partner_record("Second", date(2024, 1, 5));
        let items = due_worklist(&[first, second], date(2024, 1, 20));

        assert_eq!(items[0].customer.full_name, "First");
        assert_eq!(items[1].customer.full_name, "Second");
    }
}
