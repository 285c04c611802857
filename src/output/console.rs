//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Reddit Media Searcher                             ║
║     Finds gfycat, imgur and direct media posts        ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print one media post found during a search.
///
/// `title` is `None` when the post's title could not be read.
pub fn print_submission(
    position: u64,
    classified: u64,
    permalink: &str,
    title: Option<&str>,
    url: &str,
) {
    let indent = " ".repeat(position.to_string().len() + classified.to_string().len() + 3);

    println!(
        "{}) {} {}",
        style(position).dim(),
        style(classified).green().bold(),
        permalink
    );
    match title {
        Some(title) => println!("{}{}", indent, title),
        None => println!("{}{}", indent, style("SUBMISSION NAME COULD NOT BE READ").yellow()),
    }
    println!("{}{}", indent, style(url).underlined());
    println!();
}

/// Print query summary.
pub fn print_query_summary(headline: &str, log_path: &str) {
    println!();
    println!("{}", style(headline).bold());
    println!("  Log: {}", log_path);
    println!();
}
