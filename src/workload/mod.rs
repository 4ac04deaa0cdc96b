//! The fixed call tree driven by the probe
//!
//! - [`chains`]: direct calls and calls through [`BufferWork`] trait objects
//! - [`recursion`]: the recursive chain of configurable depth
//! - [`leaves`]: leaf functions that own the larger scratch buffers
//! - [`constants`]: buffer sizes, strides and depth limits
//!
//! [`run`] executes the whole tree once, in order: direct chain, indirect
//! chain, recursive chain.

pub mod chains;
pub mod constants;
pub mod leaves;
pub mod recursion;

pub use chains::{direct_call_chain, indirect_dispatch, ChainSums};
pub use leaves::{leaf_large, leaf_medium, leaf_small};
pub use recursion::nested_call_chain;

use crate::probe::Probe;

/// Work done on a byte buffer by a leaf function
///
/// Implemented for every `Fn(&mut Probe, &[u8]) -> u64`, so plain leaf
/// functions can be passed wherever a `&dyn BufferWork` is expected.
pub trait BufferWork {
    fn work(&self, probe: &mut Probe, input: &[u8]) -> u64;
}

impl<F> BufferWork for F
where
    F: Fn(&mut Probe, &[u8]) -> u64,
{
    fn work(&self, probe: &mut Probe, input: &[u8]) -> u64 {
        self(probe, input)
    }
}

/// Checksums produced by one full run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSums {
    pub direct: ChainSums,
    pub indirect: ChainSums,
}

/// Run the whole call tree once
#[inline(never)]
pub fn run(probe: &mut Probe, argc: usize, depth: usize) -> RunSums {
    let direct = direct_call_chain(probe, argc);
    let indirect = indirect_dispatch(probe, &leaf_small, &leaf_medium);
    nested_call_chain(probe, depth);
    RunSums { direct, indirect }
}
