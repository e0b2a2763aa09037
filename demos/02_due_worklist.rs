/// due worklist - the dashboard's next-actionable installment per customer
use allocation_engine_rs::{
    due_worklist, Allocation, AllocationInput, Customer, Discount, EventStore, Fees, Money,
    PaymentMethod, SafeTimeProvider, TimeSource, Vehicle,
};
use chrono::{NaiveDate, TimeZone, Utc};

fn partner(name: &str, purchase: NaiveDate, time: &SafeTimeProvider) -> Allocation {
    let mut events = EventStore::new();
    let input = AllocationInput {
        customer: Customer {
            full_name: name.to_string(),
            nic: "881234567V".to_string(),
            contact_no: "0711111111".to_string(),
            address: "Main Street, Matara".to_string(),
        },
        vehicle: Some(Vehicle {
            vehicle_type: "Wagon R".to_string(),
            base_price: Money::from_major(450_000),
            engine_no: format!("EN-{}", name),
            chassis_no: format!("CH-{}", name),
        }),
        purchase_date: purchase,
        payment_method: PaymentMethod::PartnerLeasing,
        fees: Fees::default(),
        discount: Discount::default(),
        interest_amount: Money::from_major(12_000),
        down_payment: Money::from_major(150_000),
        manual_split: None,
        leasing_officer: None,
    };
    Allocation::create(input, time, &mut events).expect("valid input")
}

fn main() {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    ));
    let today = time.now().date_naive();

    let records = vec![
        partner("Gunawardena", NaiveDate::from_ymd_opt(2023, 11, 20).unwrap(), &time),
        partner("Fernando", NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(), &time),
        partner("Dias", NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), &time),
    ];

    for item in due_worklist(&records, today) {
        let state = match item.days_overdue() {
            Some(days) => format!("{} days overdue", days),
            None => format!("due in {} days", item.days_remaining),
        };
        println!(
            "{} installment {} of {} due {} ({})",
            item.customer.full_name, item.ordinal, item.amount, item.due_date, state
        );
    }
}
