//! Bitwise primitives of SHA-256.
//!
//! `sigma0`/`sigma1` are the compression-round mixers (Σ0/Σ1), `gamma0`/`gamma1`
//! the schedule-expansion mixers (σ0/σ1). All four are XORs of rotations and
//! shifts, hence linear over GF(2). `ch` and `maj` are not.

/// Rotate right by `n` bits.
#[inline(always)]
#[must_use]
pub const fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// Choice: for each bit, pick `y` where `x` is set and `z` elsewhere.
#[inline(always)]
#[must_use]
pub const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Majority of the three inputs, bitwise.
#[inline(always)]
#[must_use]
pub const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0, applied to register `a` in every round.
#[inline(always)]
#[must_use]
pub const fn sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// Σ1, applied to register `e` in every round.
#[inline(always)]
#[must_use]
pub const fn sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// σ0 of the message schedule (applied to `W[t-15]`).
#[inline(always)]
#[must_use]
pub const fn gamma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// σ1 of the message schedule (applied to `W[t-2]`).
#[inline(always)]
#[must_use]
pub const fn gamma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}
