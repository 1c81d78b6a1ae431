//! Human-readable progress output.
//!
//! The scenario's running log goes to stdout so it reads well when piped
//! into CI logs; `tracing` carries the diagnostic detail separately.

/// Print a numbered scenario step header.
pub fn step(number: usize, message: &str) {
    println!("\n[{:2}] {}", number, message);
}

/// Print a success line for the current step.
pub fn success(message: &str) {
    println!("  ok  {}", message);
}

/// Print a failure line for the current step.
pub fn failure(message: &str) {
    println!("  FAIL  {}", message);
}

/// Print the banner that opens and closes a run.
pub fn banner(title: &str) {
    println!("\n{}", "=".repeat(50));
    println!("{}", title);
    println!("{}", "=".repeat(50));
}
