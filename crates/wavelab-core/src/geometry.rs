// File: crates/wavelab-core/src/geometry.rs
// Summary: Lightweight numeric helpers for pixel math.

/// Round to nearest integer with ties going toward +infinity
/// (`-50.5 -> -50`, `50.5 -> 51`). `f64::round` sends ties away from zero.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
