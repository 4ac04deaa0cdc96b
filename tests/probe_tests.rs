// Integration tests for the probe and the call tree

use stackprobe::probe::record::{CallKind, ProbeOutput, Record};
use stackprobe::probe::summary::Summary;
use stackprobe::probe::{Baseline, Offset, Probe};
use stackprobe::scratch;
use stackprobe::workload::{
    self, direct_call_chain, indirect_dispatch, leaf_medium, leaf_small, nested_call_chain,
};

// Baseline taken in the calling test's own frame
macro_rules! new_probe {
    () => {
        Probe::new(Baseline::capture(), ProbeOutput::captured())
    };
}

/// Offsets of `label` records, in report order
fn offsets_of(probe: &Probe, label: &str) -> Vec<(Option<usize>, Offset)> {
    probe
        .output()
        .records()
        .iter()
        .filter_map(|r| match r {
            Record::Offset {
                label: l,
                level,
                offset,
                ..
            } if *l == label => Some((*level, *offset)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_fill_pattern_by_inspection() {
    fn check<const N: usize>(k: u8) {
        let buf = scratch::fill_pattern::<N>(k);
        assert_eq!(buf.len(), N);
        for (i, byte) in buf.iter().enumerate() {
            assert_eq!(*byte as usize, (i * k as usize) % 256, "N={} k={} i={}", N, k, i);
        }
    }

    for k in [0u8, 1, 7, 11, 13, 17, 255] {
        check::<1>(k);
        check::<20>(k);
        check::<256>(k);
        check::<2000>(k);
    }
}

#[test]
fn test_end_to_end_checksum() {
    let a = scratch::fill_pattern::<2000>(7);
    let b = scratch::fill_pattern::<200>(11);

    let mut expected: u64 = 0;
    for i in 0..2000usize {
        expected += ((i * 7) % 256) as u64;
        expected += (((i % 200) * 11) % 256) as u64;
    }

    assert_eq!(scratch::checksum(&a, &b), expected);
    assert_eq!(scratch::checksum(&b, &a), expected);
    assert_eq!(scratch::fill_and_checksum::<2000>(7, &b), expected);
}

#[test]
fn test_nested_chain_counts_descents() {
    for depth in [0usize, 1, 3, 7] {
        let mut probe = new_probe!();
        nested_call_chain(&mut probe, depth);
        assert_eq!(probe.descents(), depth, "depth {}", depth);

        let steps = offsets_of(&probe, "chain_step");
        assert_eq!(steps.len(), depth + 1);
        let levels: Vec<_> = steps.iter().map(|(level, _)| level.unwrap()).collect();
        let expected: Vec<_> = (0..=depth).rev().collect();
        assert_eq!(levels, expected);

        // One tail workload per descent, run on the way back up
        assert_eq!(offsets_of(&probe, "chain_tail").len(), depth);
    }
}

#[test]
fn test_offsets_grow_with_depth() {
    let mut probe = new_probe!();
    nested_call_chain(&mut probe, 6);

    let steps = offsets_of(&probe, "chain_step");
    for pair in steps.windows(2) {
        let (shallow, deep) = (pair[0].1, pair[1].1);
        assert!(
            deep.magnitude() >= shallow.magnitude(),
            "deeper level reported {} < {}",
            deep.magnitude(),
            shallow.magnitude()
        );
    }
    // Five frames per descent, so the stack really moved
    assert!(steps.last().unwrap().1.magnitude() > steps[0].1.magnitude());
}

#[test]
fn test_leaf_reports_deeper_than_its_caller() {
    let mut probe = new_probe!();
    direct_call_chain(&mut probe, 1);

    let chain_entry = offsets_of(&probe, "direct_call_chain")[0].1;
    let leaf = offsets_of(&probe, "leaf_small")[0].1;
    assert!(leaf.magnitude() >= chain_entry.magnitude());
}

#[test]
fn test_indirect_matches_direct() {
    let mut probe = new_probe!();
    let direct = direct_call_chain(&mut probe, 1);
    let indirect = indirect_dispatch(&mut probe, &leaf_small, &leaf_medium);
    assert_eq!(direct, indirect);

    let a = scratch::fill_pattern::<2000>(7);
    let b = scratch::fill_pattern::<200>(11);
    assert_eq!(leaf_small(&mut probe, &a), indirect.first);
    assert_eq!(leaf_medium(&mut probe, &b), indirect.second);
}

#[test]
fn test_indirect_with_closures() {
    let pattern = [3u8, 5, 7];
    let against_pattern = |_: &mut Probe, input: &[u8]| scratch::checksum(input, &pattern);
    let length_only = |_: &mut Probe, input: &[u8]| input.len() as u64;

    let mut probe = new_probe!();
    let sums = indirect_dispatch(&mut probe, &against_pattern, &length_only);

    let a = scratch::fill_pattern::<2000>(7);
    assert_eq!(sums.first, scratch::checksum(&a, &pattern));
    assert_eq!(sums.second, 200);
}

#[test]
fn test_argc_does_not_change_direct_chain() {
    let mut probe = new_probe!();
    let one = direct_call_chain(&mut probe, 1);
    let many = direct_call_chain(&mut probe, 5);
    assert_eq!(one, many);
}

#[test]
fn test_run_output_lines() {
    let mut probe = new_probe!();
    let sums = workload::run(&mut probe, 1, 2);
    let output = probe.into_output();

    for (record, line) in output.records().iter().zip(output.lines()) {
        let fields: Vec<&str> = line.trim_start_matches('\t').split(' ').collect();
        match record {
            Record::Offset { .. } => {
                assert_eq!(fields.len(), 3, "offset line: {:?}", line);
                assert!(fields[1].parse::<isize>().is_ok());
                assert!(fields[2].parse::<isize>().is_ok());
            }
            Record::Checksum { .. } => {
                assert_eq!(fields.len(), 2, "checksum line: {:?}", line);
                assert!(fields[1].parse::<u64>().is_ok());
            }
        }
        assert_eq!(line.len() - line.trim_start_matches('\t').len(), record.indent());
    }

    let first_small = output
        .lines()
        .into_iter()
        .find(|l| l.trim_start().starts_with("leaf_small ") && l.split(' ').count() == 2)
        .unwrap();
    assert!(first_small.ends_with(&format!(" {}", sums.direct.first)));
}

#[test]
fn test_run_is_deterministic() {
    let mut first = new_probe!();
    let mut second = new_probe!();
    assert_eq!(
        workload::run(&mut first, 1, 3),
        workload::run(&mut second, 4, 3)
    );
}

#[test]
fn test_summary_of_full_run() {
    let mut probe = new_probe!();
    workload::run(&mut probe, 1, 4);
    let records = probe.into_output().into_records();
    let summary = Summary::from_records(&records);

    let step = summary.get("chain_step").unwrap();
    assert_eq!(step.reports, 5);
    assert!(step.cycle);
    assert!(!step.dynamic);

    let small = summary.get("leaf_small").unwrap();
    assert_eq!(small.reports, 2);
    assert!(small.dynamic);
    assert_eq!(small.tags(), "DYN");

    assert_eq!(summary.get("leaf_large").unwrap().reports, 4);
    assert_eq!(summary.get("direct_call_chain").unwrap().reports, 4);

    // Checksums are not offsets
    assert!(records
        .iter()
        .any(|r| matches!(r, Record::Checksum { kind: CallKind::Dynamic, .. })));
    assert!(summary.get("missing").is_none());
}

#[test]
fn test_chain_tail_shares_indent_with_its_leaf() {
    let depth = 3;
    let mut probe = new_probe!();
    nested_call_chain(&mut probe, depth);
    let records = probe.output().records();

    let step_indents: Vec<_> = records
        .iter()
        .filter(|r| r.name().starts_with("chain_step["))
        .map(|r| r.indent())
        .collect();
    let expected: Vec<_> = (1..=depth + 1).collect();
    assert_eq!(step_indents, expected);

    // leaf_large checksum, leaf_large offset, chain_tail: one indent per tail
    let tail_indents: Vec<_> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.name() == "chain_tail")
        .map(|(i, r)| {
            assert_eq!(records[i - 1].name(), "leaf_large");
            assert_eq!(records[i - 2].name(), "leaf_large");
            assert_eq!(records[i - 1].indent(), r.indent());
            assert_eq!(records[i - 2].indent(), r.indent());
            r.indent()
        })
        .collect();
    let expected: Vec<_> = (1..=depth).rev().collect();
    assert_eq!(tail_indents, expected);
    assert!(tail_indents[0] < *step_indents.last().unwrap());
}
