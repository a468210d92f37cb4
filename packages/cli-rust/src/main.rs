//! credtool - Retrieve usernames and passwords from gnu-pw-mgr
//!
//! This is the main entry point for the Rust CLI binary.

fn main() {
    if let Err(err) = credtool::run() {
        std::process::exit(credtool::report_error(&err));
    }
}
