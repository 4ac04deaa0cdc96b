//! Per-function peak stack depth
//!
//! Folds offset records into one [`FrameStats`] per label: how often it
//! reported, the deepest stack and frame offsets seen, and whether it was
//! reached through a dynamic call or inside the recursive chain.

use super::record::{CallKind, Record};
use rustc_hash::FxHashMap;
use std::fmt;

/// Aggregate for one label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub reports: usize,
    pub peak_sp: isize,
    pub peak_fp: isize,
    pub dynamic: bool,
    pub cycle: bool,
}

impl FrameStats {
    fn observe(&mut self, sp: isize, fp: isize, kind: CallKind) {
        if self.reports == 0 {
            self.peak_sp = sp;
            self.peak_fp = fp;
        } else {
            self.peak_sp = self.peak_sp.max(sp);
            self.peak_fp = self.peak_fp.max(fp);
        }
        self.reports += 1;
        match kind {
            CallKind::Direct => {}
            CallKind::Dynamic => self.dynamic = true,
            CallKind::Cycle => self.cycle = true,
        }
    }

    /// `DYN` / `CYC` tags, space separated
    pub fn tags(&self) -> String {
        let mut tags = Vec::new();
        if self.dynamic {
            tags.push(CallKind::Dynamic.tag());
        }
        if self.cycle {
            tags.push(CallKind::Cycle.tag());
        }
        tags.join(" ")
    }
}

/// Peak depth per label, over a whole run
#[derive(Debug, Clone, Default)]
pub struct Summary {
    stats: FxHashMap<&'static str, FrameStats>,
}

impl Summary {
    pub fn from_records(records: &[Record]) -> Self {
        let mut stats: FxHashMap<&'static str, FrameStats> = FxHashMap::default();
        for record in records {
            if let Record::Offset {
                label,
                kind,
                offset,
                ..
            } = record
            {
                stats
                    .entry(*label)
                    .or_default()
                    .observe(offset.sp, offset.fp, *kind);
            }
        }
        Summary { stats }
    }

    pub fn get(&self, label: &str) -> Option<&FrameStats> {
        self.stats.get(label)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Deepest peak across all labels
    pub fn max_peak_sp(&self) -> isize {
        self.stats.values().map(|s| s.peak_sp).max().unwrap_or(0)
    }

    /// Entries sorted by descending peak, ties broken by label
    pub fn entries(&self) -> Vec<(&'static str, &FrameStats)> {
        let mut entries: Vec<_> = self.stats.iter().map(|(k, v)| (*k, v)).collect();
        entries.sort_by(|a, b| b.1.peak_sp.cmp(&a.1.peak_sp).then(a.0.cmp(b.0)));
        entries
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, stats) in self.entries() {
            write!(
                f,
                "{} reports={} peak_sp={} peak_fp={}",
                label, stats.reports, stats.peak_sp, stats.peak_fp
            )?;
            let tags = stats.tags();
            if !tags.is_empty() {
                write!(f, " {}", tags)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
