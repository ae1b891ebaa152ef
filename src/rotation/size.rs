//! Config files give the rotation limit as `"10M"` or `"1G"`; the policy wants bytes.

/// Parses a byte count with an optional binary unit: `K`, `M`, `G`, each optionally
/// followed by `B`, case-insensitive. Fractions are allowed (`"1.5K"`); negative,
/// non-finite or unit-only inputs are rejected.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim();
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);

    let shift = match unit.trim().to_ascii_uppercase().as_str() {
        "" | "B" => 0,
        "K" | "KB" => 10,
        "M" | "MB" => 20,
        "G" | "GB" => 30,
        _ => return None,
    };

    let value: f64 = number.parse().ok()?;
    let bytes = value * f64::from(1u32 << shift);
    if !bytes.is_finite() || bytes > u64::MAX as f64 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(bytes as u64)
}
