/// quick start - create a partner-leasing allocation and settle an installment
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
            full_name: "N. Jayasinghe".to_string(),
            nic: "851234567V".to_string(),
            contact_no: "0712345678".to_string(),
            address: "12 Temple Road, Kandy".to_string(),
        },
        vehicle: Some(Vehicle {
            vehicle_type: "Alto 800".to_string(),
            base_price: Money::from_major(500_000),
            engine_no: "EN-48213".to_string(),
            chassis_no: "CH-90177".to_string(),
        }),
        purchase_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        payment_method: PaymentMethod::PartnerLeasing,
        fees: Fees {
            registration_fee: Money::from_major(5_000),
            document_charge: Money::from_major(3_000),
            insurance_fee: Money::from_major(2_000),
        },
        discount: Discount::default(),
        interest_amount: Money::from_major(15_000),
        down_payment: Money::from_major(100_000),
        manual_split: None,
        leasing_officer: None,
    };

    // create with derived pricing and a three-installment schedule
    let mut allocation = Allocation::create(input, &time, &mut events)?;
    println!("total:   {}", allocation.total_amount);
    println!("down:    {}", allocation.down_payment);
    println!("balance: {}", allocation.balance);

    // settle the first installment
    allocation.set_installment_paid(1, true, &time, &mut events)?;
    println!("outstanding after installment 1: {}", allocation.outstanding());

    // print current state
    println!("{}", allocation.json());

    Ok(())
}
