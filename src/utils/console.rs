// src/utils/console.rs

//! Console reporting helpers.
//!
//! Structured lines go through the `log` facade; `success` always reaches
//! stdout so the operator sees where the data went regardless of log level.

/// Log a header
pub fn header(title: &str) {
    let border = "═".repeat(60);
    log::info!("{}", border);
    log::info!("  {}", title);
    log::info!("{}", border);
}

/// Log a step in a process
pub fn step(step_num: u32, total: u32, message: &str) {
    log::info!("[PAGE {}/{}] {}", step_num, total, message);
}

/// Log a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    log::info!("[SUMMARY] {}", title);
    for (key, value) in items {
        log::info!("    {}: {}", key, value);
    }
}

/// Print a success message (always shown)
pub fn success(message: &str) {
    println!("{}", message);
}
