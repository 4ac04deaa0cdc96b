//! Direct and indirect call chains
//!
//! Both chains hand the same two input buffers (2000 bytes stride 7, then
//! 200 bytes stride 11) to two leaf functions, and report their own offset
//! on entry, after each leaf and on exit. They differ only in how the leaves
//! are reached.

use super::constants::*;
use super::leaves::{leaf_medium, leaf_small};
use super::BufferWork;
use crate::probe::record::CallKind;
use crate::probe::Probe;
use crate::scratch;
use std::hint::black_box;

/// Checksums returned by the two leaves of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSums {
    pub first: u64,
    pub second: u64,
}

/// Call [`leaf_small`] and [`leaf_medium`] directly
///
/// `argc` is accepted for parity with the process arguments but does not
/// change which leaves run.
#[inline(never)]
pub fn direct_call_chain(probe: &mut Probe, argc: usize) -> ChainSums {
    log::debug!("direct call chain, argc={}", argc);
    probe.enter(CallKind::Direct);
    probe.report_offset("direct_call_chain");

    let first = {
        let input = scratch::fill_pattern::<INPUT_A_LEN>(INPUT_A_STRIDE);
        probe.enter(CallKind::Direct);
        let sum = leaf_small(probe, black_box(&input));
        probe.leave();
        probe.report_offset("direct_call_chain");
        sum
    };

    let second = {
        let input = scratch::fill_pattern::<INPUT_B_LEN>(INPUT_B_STRIDE);
        probe.enter(CallKind::Direct);
        let sum = leaf_medium(probe, black_box(&input));
        probe.leave();
        probe.report_offset("direct_call_chain");
        sum
    };

    probe.report_offset("direct_call_chain");
    probe.leave();
    ChainSums { first, second }
}

/// Call two leaves through trait objects
#[inline(never)]
pub fn indirect_dispatch(
    probe: &mut Probe,
    work_a: &dyn BufferWork,
    work_b: &dyn BufferWork,
) -> ChainSums {
    log::debug!("indirect dispatch");
    probe.enter(CallKind::Direct);
    probe.report_offset("indirect_dispatch");

    let first = {
        let input = scratch::fill_pattern::<INPUT_A_LEN>(INPUT_A_STRIDE);
        probe.enter(CallKind::Dynamic);
        let sum = work_a.work(probe, black_box(&input));
        probe.leave();
        probe.report_offset("indirect_dispatch");
        sum
    };

    let second = {
        let input = scratch::fill_pattern::<INPUT_B_LEN>(INPUT_B_STRIDE);
        probe.enter(CallKind::Dynamic);
        let sum = work_b.work(probe, black_box(&input));
        probe.leave();
        probe.report_offset("indirect_dispatch");
        sum
    };

    probe.report_offset("indirect_dispatch");
    probe.leave();
    ChainSums { first, second }
}
