//! Baseline capture and offset reporting
//!
//! A [`Probe`] is the context object threaded through every probed call. It
//! owns the [`Baseline`] taken once at startup and the [`ProbeOutput`] that
//! collects every reported line.
//!
//! # Offsets
//!
//! ```text
//! offset.sp = baseline.sp - current_stack_pointer()
//! offset.fp = baseline.fp - current_frame_address()
//! ```
//!
//! On a stack that grows downward both values grow as calls nest deeper.

pub mod record;
pub mod summary;

use crate::platform::{self, Address};
use record::{CallKind, ProbeOutput, Record};

/// Stack and frame pointer captured once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline {
    pub sp: Address,
    pub fp: Address,
}

impl Baseline {
    /// Capture the caller's stack pointer and frame address
    #[inline(always)]
    pub fn capture() -> Self {
        Baseline {
            sp: platform::current_stack_pointer(),
            fp: platform::current_frame_address(),
        }
    }

    /// Offset of the given addresses relative to this baseline
    pub fn offset_of(&self, sp: Address, fp: Address) -> Offset {
        Offset {
            sp: self.sp.wrapping_sub(sp) as isize,
            fp: self.fp.wrapping_sub(fp) as isize,
        }
    }
}

/// Distance from the baseline, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub sp: isize,
    pub fp: isize,
}

impl Offset {
    /// Absolute stack pointer distance
    pub fn magnitude(&self) -> usize {
        self.sp.unsigned_abs()
    }
}

/// Probe context passed down the call tree
#[derive(Debug)]
pub struct Probe {
    baseline: Baseline,
    output: ProbeOutput,
    frames: Vec<CallKind>,
    descents: usize,
}

impl Probe {
    pub fn new(baseline: Baseline, output: ProbeOutput) -> Self {
        Probe {
            baseline,
            output,
            frames: Vec::new(),
            descents: 0,
        }
    }

    /// Report the caller's offset from the baseline under `label`
    #[inline(always)]
    pub fn report_offset(&mut self, label: &'static str) -> Offset {
        let offset = self.current_offset();
        self.push_offset(label, None, offset);
        offset
    }

    /// Like [`Probe::report_offset`], tagged with a recursion level
    #[inline(always)]
    pub fn report_level(&mut self, label: &'static str, level: usize) -> Offset {
        let offset = self.current_offset();
        self.push_offset(label, Some(level), offset);
        offset
    }

    /// Offset of the caller without recording anything
    #[inline(always)]
    pub fn current_offset(&self) -> Offset {
        self.baseline.offset_of(
            platform::current_stack_pointer(),
            platform::current_frame_address(),
        )
    }

    pub fn report_checksum(&mut self, function: &'static str, sum: u64) {
        let record = Record::Checksum {
            function,
            indent: self.indent(),
            kind: self.kind(),
            sum,
        };
        self.output.push(record);
    }

    /// Open a nesting level reached through `kind`
    pub fn enter(&mut self, kind: CallKind) {
        self.frames.push(kind);
    }

    /// Close the innermost nesting level
    pub fn leave(&mut self) {
        self.frames.pop();
    }

    /// Count one level of recursive descent
    pub fn count_descent(&mut self) {
        self.descents += 1;
    }

    /// Recursive descents performed so far
    pub fn descents(&self) -> usize {
        self.descents
    }

    pub fn indent(&self) -> usize {
        self.frames.len()
    }

    /// Kind of the innermost nesting level
    pub fn kind(&self) -> CallKind {
        self.frames.last().copied().unwrap_or(CallKind::Direct)
    }

    pub fn output(&self) -> &ProbeOutput {
        &self.output
    }

    pub fn into_output(self) -> ProbeOutput {
        self.output
    }

    fn push_offset(&mut self, label: &'static str, level: Option<usize>, offset: Offset) {
        let record = Record::Offset {
            label,
            level,
            indent: self.indent(),
            kind: self.kind(),
            offset,
        };
        self.output.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_baseline_minus_current() {
        let baseline = Baseline {
            sp: 0x7000_1000,
            fp: 0x7000_2000,
        };
        let offset = baseline.offset_of(0x7000_0f00, 0x7000_1e00);
        assert_eq!(offset, Offset { sp: 0x100, fp: 0x200 });
        assert_eq!(offset.magnitude(), 0x100);
    }

    #[test]
    fn test_offset_can_be_negative() {
        let baseline = Baseline { sp: 0x100, fp: 0x100 };
        let offset = baseline.offset_of(0x140, 0x100);
        assert_eq!(offset.sp, -0x40);
        assert_eq!(offset.fp, 0);
        assert_eq!(offset.magnitude(), 0x40);
    }

    #[test]
    fn test_enter_leave_tracks_kind() {
        let mut probe = Probe::new(Baseline::capture(), ProbeOutput::captured());
        assert_eq!(probe.kind(), CallKind::Direct);
        probe.enter(CallKind::Dynamic);
        probe.enter(CallKind::Cycle);
        assert_eq!(probe.indent(), 2);
        assert_eq!(probe.kind(), CallKind::Cycle);
        probe.leave();
        assert_eq!(probe.kind(), CallKind::Dynamic);
        probe.leave();
        probe.leave();
        assert_eq!(probe.indent(), 0);
    }
}
