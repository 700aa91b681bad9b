/// quick start - payable amount on a pledged kalam
use kalam_rs::{final_amount, rounded_elapsed_months_and_days, CalendarDate, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ₹5,000 lent at 3% a month
    let principal = Money::from_major(5_000);
    let rate = Rate::from_monthly_roi(3);

    let start = CalendarDate::new(2021, 3, 1)?;
    let end = CalendarDate::new(2025, 2, 15)?;
    let billed = rounded_elapsed_months_and_days(start, end, false);

    let compound = final_amount(principal, rate, billed.total_months, billed.days, true);
    let simple = final_amount(principal, rate, billed.total_months, billed.days, false);

    println!("billed for: {}", billed);
    println!("compound payable: ₹{}", compound);
    println!("simple payable:   ₹{}", simple);

    Ok(())
}
