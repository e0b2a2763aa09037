/// json state - serialize an allocation and normalize a tampered copy
use allocation_engine_rs::{
    Allocation, AllocationInput, Customer, Discount, EventStore, Fees, Money, PaymentMethod,
    SafeTimeProvider, TimeSource, Vehicle,
};
use chrono::NaiveDate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let mut events = EventStore::new();

    let input = AllocationInput {
        customer: Customer {
            full_name: "K. Silva".to_string(),
            nic: "901234567V".to_string(),
            contact_no: "0779876543".to_string(),
            address: "4 Lake View, Galle".to_string(),
        },
        vehicle: Some(Vehicle {
            vehicle_type: "Every Buddy Van".to_string(),
            base_price: Money::from_major(750_000),
            engine_no: "EN-70021".to_string(),
            chassis_no: "CH-55310".to_string(),
        }),
        purchase_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        payment_method: PaymentMethod::PartnerLeasing,
        fees: Fees {
            registration_fee: Money::from_major(6_000),
            document_charge: Money::from_major(2_500),
            insurance_fee: Money::from_major(4_000),
        },
        discount: Discount::of(Money::from_major(12_500)),
        interest_amount: Money::from_major(30_000),
        down_payment: Money::from_major(250_000),
        manual_split: None,
        leasing_officer: None,
    };

    let allocation = Allocation::create(input, &time, &mut events)?;

    // round-trip through JSON, the engine's external shape
    let json = allocation.json();
    let mut restored: Allocation = serde_json::from_str(&json)?;
    assert_eq!(restored, allocation);

    // a stale derived field on a loaded row is repaired, not trusted
    restored.total_amount = Money::ZERO;
    restored.normalize()?;
    assert_eq!(restored.total_amount, allocation.total_amount);

    println!("{}", json);
    Ok(())
}
