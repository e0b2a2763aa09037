/// manual split - live preview of pricing and a manually overridden schedule
use allocation_engine_rs::{
    compute_totals, schedule, Discount, Fees, ManualSplit, Money, PaymentMethod, PricingInput,
};
use chrono::NaiveDate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // the edit form previews derived figures before anything is saved
    let pricing = PricingInput {
        base_price: Money::from_major(500_000),
        fees: Fees {
            registration_fee: Money::from_major(5_000),
            document_charge: Money::from_major(3_000),
            insurance_fee: Money::from_major(2_000),
        },
        payment_method: PaymentMethod::PartnerLeasing,
        discount: Discount::default(),
        interest_amount: Money::from_major(15_000),
        down_payment: Money::from_major(100_000),
    };

    let totals = compute_totals(&pricing)?;
    println!("total {}, balance {}", totals.total_amount, totals.balance);

    let purchase_date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

    // default even split, remainder on the third
    let plan = schedule(totals.balance, purchase_date, None)?;
    for installment in &plan {
        println!(
            "installment {} of {} due {}",
            installment.ordinal, installment.amount, installment.due_date
        );
    }

    // the admin fixes the first installment; the rest re-split
    let manual = ManualSplit::first_only(Money::from_major(150_000));
    let plan = schedule(totals.balance, purchase_date, Some(&manual))?;
    println!(
        "override: {} / {} / {}",
        plan[0].amount, plan[1].amount, plan[2].amount
    );

    Ok(())
}
