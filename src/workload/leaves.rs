//! Leaf functions: each owns one scratch buffer and checks it against its input
//!
//! Same computation as [`scratch::fill_and_checksum`], written out so the
//! buffer is part of the leaf's frame when it reports.

use super::constants::*;
use crate::probe::Probe;
use crate::scratch;
use std::hint::black_box;

/// 20-byte buffer, stride 13
#[inline(never)]
pub fn leaf_small(probe: &mut Probe, input: &[u8]) -> u64 {
    let own = scratch::fill_pattern::<SMALL_LEN>(SMALL_STRIDE);
    let sum = scratch::checksum(black_box(&own), input);
    probe.report_checksum("leaf_small", sum);
    probe.report_offset("leaf_small");
    sum
}

/// 4000-byte buffer, stride 17
#[inline(never)]
pub fn leaf_medium(probe: &mut Probe, input: &[u8]) -> u64 {
    let own = scratch::fill_pattern::<MEDIUM_LEN>(MEDIUM_STRIDE);
    let sum = scratch::checksum(black_box(&own), input);
    probe.report_checksum("leaf_medium", sum);
    probe.report_offset("leaf_medium");
    sum
}

/// 10000-byte buffer, stride 17
#[inline(never)]
pub fn leaf_large(probe: &mut Probe, input: &[u8]) -> u64 {
    let own = scratch::fill_pattern::<LARGE_LEN>(LARGE_STRIDE);
    let sum = scratch::checksum(black_box(&own), input);
    probe.report_checksum("leaf_large", sum);
    probe.report_offset("leaf_large");
    sum
}
