//! Money formatting shared by factor text and CLI output.

/// Short currency form.
///
/// Example: 20_000_000 -> "$20.0M", 500_000 -> "$500K"
pub fn format_budget(amount: u64) -> String {
    if amount >= 1_000_000 {
        format!("${:.1}M", amount as f64 / 1_000_000.0)
    } else {
        format!("${:.0}K", amount as f64 / 1_000.0)
    }
}
