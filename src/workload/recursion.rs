//! Recursive chain
//!
//! One descent walks five frames before recursing:
//!
//! ```text
//! chain_entry → chain_mid → chain_inner → chain_step → chain_recurse ─┐
//!      ▲                                                              │
//!      └──────────────────────── depth - 1 ───────────────────────────┘
//! ```
//!
//! Each frame owns a small pad that is read again after the nested call
//! returns, so no level can be turned into a tail call and every frame stays
//! live while deeper levels report. On the way back up, `chain_recurse` runs
//! a tail workload through [`leaf_large`].

use super::constants::*;
use super::leaves::leaf_large;
use crate::probe::record::CallKind;
use crate::probe::Probe;
use crate::scratch;
use std::hint::black_box;

/// Descend `depth` levels, reporting the offset at every level
///
/// [`Probe::descents`] grows by exactly `depth`.
pub fn nested_call_chain(probe: &mut Probe, depth: usize) {
    log::debug!("recursive chain, depth={}", depth);
    let before = probe.descents();
    probe.enter(CallKind::Cycle);
    chain_entry(probe, depth);
    probe.leave();
    debug_assert_eq!(probe.descents() - before, depth);
}

#[inline(never)]
fn chain_entry(probe: &mut Probe, depth: usize) {
    let mut pad = [0u8; PAD_LEN];
    black_box(&mut pad);
    chain_mid(probe, depth);
    black_box(&pad);
}

#[inline(never)]
fn chain_mid(probe: &mut Probe, depth: usize) {
    let mut pad = [0u8; WIDE_PAD_LEN];
    black_box(&mut pad);
    chain_inner(probe, depth);
    black_box(&pad);
}

#[inline(never)]
fn chain_inner(probe: &mut Probe, depth: usize) {
    let mut pad = [0u8; PAD_LEN];
    black_box(&mut pad);
    chain_step(probe, depth);
    black_box(&pad);
}

#[inline(never)]
fn chain_step(probe: &mut Probe, depth: usize) {
    probe.report_level("chain_step", depth);
    if depth == 0 {
        return;
    }
    probe.count_descent();
    log::trace!("descent at depth {}", depth);
    chain_recurse(probe, depth - 1);
}

/// One level deeper, then the tail workload at this level's indent
#[inline(never)]
fn chain_recurse(probe: &mut Probe, depth: usize) {
    let mut pad = [0u8; PAD_LEN];
    black_box(&mut pad);
    probe.enter(CallKind::Cycle);
    chain_entry(probe, depth);
    probe.leave();
    black_box(&pad);
    chain_tail(probe);
}

#[inline(never)]
fn chain_tail(probe: &mut Probe) {
    let input = scratch::fill_pattern::<INPUT_B_LEN>(INPUT_B_STRIDE);
    leaf_large(probe, black_box(&input));
    probe.report_offset("chain_tail");
}
