//! Damage resolution shared by every attacker.

/// Damage dealt by a hit with `attack` against `defense`.
///
/// The floor of 1 guarantees every exchange makes progress.
#[inline]
pub fn strike_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense).max(1)
}

/// Scales `value` by `numerator / denominator`, truncating.
#[inline]
pub(crate) fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    ((u64::from(value) * u64::from(numerator)) / u64::from(denominator)) as u32
}
