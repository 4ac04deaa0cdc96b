//! Stack scratch buffers and the checksum that proves they were touched
//!
//! # Fill pattern
//!
//! ```text
//! buf[i] = (i * k) mod 256
//! ```
//!
//! # Checksum
//!
//! Both buffers are walked for `max(a.len(), b.len())` steps, each indexed
//! with wraparound, and the bytes are summed as unsigned values:
//!
//! ```text
//! sum = Σ a[i % a.len()] + b[i % b.len()]    for i in 0..max(len)
//! ```
//!
//! Every byte of both buffers is read at least once. Addition wraps instead
//! of trapping, and an empty buffer contributes nothing.

/// Fill `buf` with the stride pattern for `k`
pub fn fill(buf: &mut [u8], k: u8) {
    for (i, byte) in buf.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(k);
    }
}

/// A fresh `N`-byte buffer filled with the stride pattern for `k`
#[inline(always)]
pub fn fill_pattern<const N: usize>(k: u8) -> [u8; N] {
    let mut buf = [0u8; N];
    fill(&mut buf, k);
    buf
}

/// Sum two buffers against each other with wraparound indexing
pub fn checksum(a: &[u8], b: &[u8]) -> u64 {
    let steps = a.len().max(b.len());
    let mut sum = 0u64;
    for i in 0..steps {
        if !a.is_empty() {
            sum = sum.wrapping_add(a[i % a.len()] as u64);
        }
        if !b.is_empty() {
            sum = sum.wrapping_add(b[i % b.len()] as u64);
        }
    }
    sum
}

/// Fill an `N`-byte buffer in a frame of its own and check it against `other`
///
/// The leaves in [`crate::workload::leaves`] spell this out with
/// [`fill_pattern`] and [`checksum`] so the buffer sits in the leaf's own
/// frame and shows up in its reported offset.
#[inline(never)]
pub fn fill_and_checksum<const N: usize>(k: u8, other: &[u8]) -> u64 {
    let buf = fill_pattern::<N>(k);
    checksum(std::hint::black_box(&buf), other)
}
