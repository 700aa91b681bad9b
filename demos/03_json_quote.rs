/// json quote - full quote with interest ledger, serialized for display
use chrono::{Duration, TimeZone, Utc};
use kalam_rs::{CalendarDate, LoanConfig, LoanQuote, Money, SafeTimeProvider, TimeSource};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json quote ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2025, 2, 15, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let config = LoanConfig::compound(Money::from_major(100_000), dec!(1.5));
    println!("config:\n{}\n", config.to_json()?);

    let start = CalendarDate::new(2022, 12, 26)?;

    // open-ended quote runs to today
    let quote = LoanQuote::generate(&config, start, None, &time)?;
    println!("quote as of {}:\n{}\n", quote.end, quote.to_json_pretty()?);

    // a month later
    controller.advance(Duration::days(30));
    let later = LoanQuote::generate(&config, start, None, &time)?;
    println!("as of {}: payable ₹{} over {}", later.end, later.final_amount, later.billed);

    for row in later.breakdown.iter() {
        println!(
            "  {:>3} {:<6} on ₹{:<14} interest ₹{:<14} total ₹{}",
            row.duration,
            format!("{:?}", row.unit).to_lowercase(),
            row.principal.round_dp(2),
            row.interest.round_dp(2),
            row.total.round_dp(2),
        );
    }

    Ok(())
}
