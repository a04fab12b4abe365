// File: crates/chart-core/src/number.rs
// Summary: Number formatting for tick labels and value annotations.

/// Format an integer with `,` between groups of three digits: 1234567 -> "1,234,567".
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const MAX_TICK_DECIMALS: usize = 6;

/// Decimal places needed to write `step` exactly: 0.25 -> 2, 2.5 -> 1, 500 -> 0.
pub fn step_decimals(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    (0..MAX_TICK_DECIMALS)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() <= scaled * 1e-9
        })
        .unwrap_or(MAX_TICK_DECIMALS)
}

/// Tick label for `value` given the spacing between ticks.
/// Whole-number steps print grouped integers; fractional steps keep the step's decimals.
pub fn format_tick(value: f64, step: f64) -> String {
    match step_decimals(step) {
        0 => group_thousands(value.round() as i64),
        decimals => format!("{:.*}", decimals, value),
    }
}
