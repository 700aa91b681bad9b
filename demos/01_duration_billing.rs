/// duration billing - raw and rounded months and days
use kalam_rs::{
    elapsed_months_and_days, rounded_elapsed_months_and_days, CalendarDate, DateFormat,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== duration billing ===\n");

    let spans = [
        ("01-01-2025", "01-01-2025"),
        ("01-01-2025", "05-02-2025"),
        ("10-01-2025", "10-02-2025"),
        ("15-01-2025", "10-03-2025"),
        ("31-01-2024", "29-02-2024"),
        ("20-12-2023", "05-01-2024"),
    ];

    println!("{:<12} {:<12} {:>10} {:>10} {:>10}", "start", "end", "raw", "billed", "grace");
    for (start, end) in spans {
        // form values arrive as DD-MM-YYYY
        let start = CalendarDate::parse(start, DateFormat::DayMonthYear)?;
        let end = CalendarDate::parse(end, DateFormat::DayMonthYear)?;

        let raw = elapsed_months_and_days(start, end);
        let billed = rounded_elapsed_months_and_days(start, end, false);
        let grace = rounded_elapsed_months_and_days(start, end, true);

        println!(
            "{:<12} {:<12} {:>4}m {:>3}d {:>4}m {:>3}d {:>4}m {:>3}d",
            start.format(DateFormat::DayMonthYear),
            end.format(DateFormat::DayMonthYear),
            raw.total_months,
            raw.days,
            billed.total_months,
            billed.days,
            grace.total_months,
            grace.days,
        );
    }

    Ok(())
}
