//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Login spinner
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{
    print_banner, print_error, print_info, print_query_summary, print_submission, print_success,
    print_warning,
};
pub use progress::create_spinner;
pub use stats::print_run_summary;
