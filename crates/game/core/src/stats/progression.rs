//! Experience curve.

use crate::config::ProgressionTables;

/// Experience needed to advance from `level` to `level + 1`.
///
/// `floor(base_experience × growth^(level - 1))`. Level 0 is treated as 1.
pub fn experience_to_next(level: u32, tables: &ProgressionTables) -> u64 {
    let exponent = level.saturating_sub(1);
    let exponent = i32::try_from(exponent).unwrap_or(i32::MAX);
    let raw = tables.base_experience as f64 * tables.growth.powi(exponent);

    if raw.is_finite() && raw >= 0.0 {
        // `as` saturates at u64::MAX for huge values.
        raw.floor() as u64
    } else {
        u64::MAX
    }
}
