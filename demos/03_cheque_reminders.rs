/// cheque reminders - release reminders derived from down-payment dates
use allocation_engine_rs::{
    reminders, Allocation, AllocationInput, Customer, Discount, EngineConfig, EventStore, Fees,
    Money, PaymentMethod, SafeTimeProvider, TimeSource, Vehicle,
};
use chrono::{NaiveDate, TimeZone, Utc};

fn allocation(name: &str, purchase: NaiveDate, time: &SafeTimeProvider) -> Allocation {
    let mut events = EventStore::new();
    let input = AllocationInput {
        customer: Customer {
            full_name: name.to_string(),
            nic: "861234567V".to_string(),
            contact_no: "0753333333".to_string(),
            address: "Station Road, Kurunegala".to_string(),
        },
        vehicle: Some(Vehicle {
            vehicle_type: "Bolero City".to_string(),
            base_price: Money::from_major(600_000),
            engine_no: format!("EN-{}", name),
            chassis_no: format!("CH-{}", name),
        }),
        purchase_date: purchase,
        payment_method: PaymentMethod::OtherCompanyLeasing,
        fees: Fees::default(),
        discount: Discount::default(),
        interest_amount: Money::ZERO,
        down_payment: Money::from_major(200_000),
        manual_split: None,
        leasing_officer: None,
    };
    Allocation::create(input, time, &mut events).expect("valid input")
}

fn main() {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 20, 9, 0, 0).unwrap(),
    ));
    let today = time.now().date_naive();
    let config = EngineConfig::default();
    let mut events = EventStore::new();

    let mut early = allocation("Wickrama", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), &time);
    let late = allocation("Bandara", NaiveDate::from_ymd_opt(2024, 1, 18).unwrap(), &time);

    // day-to-day view: pending cheques only
    for reminder in reminders(&[early.clone(), late.clone()], &config, false) {
        let state = match reminder.days_overdue(today) {
            Some(days) => format!("{} days overdue", days),
            None => format!(
                "release in {} days",
                reminder.days_until_release(today).unwrap_or(0)
            ),
        };
        println!(
            "{}: release {} ({})",
            reminder.customer_name, reminder.release_date, state
        );
    }

    // releasing is one-way and drops the cheque from the operational view
    early.release_cheque(&time, &mut events);
    let remaining = reminders(&[early.clone(), late], &config, false);
    println!("pending after release: {}", remaining.len());

    // the review tab still sees it
    let review = reminders(&[early], &config, true);
    println!(
        "{}: {:?} on {:?}",
        review[0].customer_name, review[0].status, review[0].released_date
    );
}
