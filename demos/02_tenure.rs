/// tenure - how long a kalam can carry a loan before interest eats its value
use kalam_rs::{max_tenure_months, LoanConfig, Money, Rate, TenureQuery};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== tenure search ===\n");

    let months = max_tenure_months(
        Money::from_major(95_630),
        Money::from_major(159_384),
        Rate::from_percentage(24),
    );
    println!("₹95,630 against ₹1,59,384 at 24%: {} months", months);

    // valuation screen: item value and a loan-to-value slider
    let item_value = Money::from_major(200_000);
    for ltv in [dec!(50), dec!(65), dec!(75), dec!(90)] {
        let estimate = TenureQuery::from_ltv(item_value, ltv, Rate::from_monthly_roi(2))?.solve();
        println!("ltv {:>3}%: {:>3} months", ltv, estimate.months);
    }

    // a zero rate never reaches the item value
    let (loan, item) = (Money::from_major(1_000), Money::from_major(2_000));
    let estimate = TenureQuery::new(loan, item, Rate::ZERO).solve();
    if !estimate.bounded {
        println!("\nzero rate: capped at {} months", estimate.months);
    }

    // a branch that never lends beyond two years
    let config = LoanConfig::compound(loan, dec!(2)).with_tenure_cap(24);
    let estimate = config.tenure(item);
    println!(
        "2% a month, 24 month cap: {} months (bounded: {})",
        estimate.months, estimate.bounded
    );

    Ok(())
}
