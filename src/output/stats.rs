//! Statistics reporting.

use console::style;

use crate::search::RunSummary;

/// Print the end-of-search breakdown.
pub fn print_run_summary(summary: &RunSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!(
        "{}",
        style(format!("Total of {} submissions found!", summary.classified)).bold()
    );
    println!(
        "{} GFYCATs, {} IMGURs and {} DIRECTs",
        style(summary.gfycat).green(),
        style(summary.imgur).green(),
        style(summary.direct).green()
    );
    println!("  Posts checked: {}", summary.seen);
    if summary.skipped > 0 {
        println!("  Unreadable:    {}", style(summary.skipped).yellow());
    }
    println!("{}", style("═".repeat(50)).dim());
}
