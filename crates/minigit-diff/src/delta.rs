//! Validated file-pair change records.

use serde::{Deserialize, Serialize};

use crate::error::{DeltaError, DeltaResult, Side};
use crate::file::FileRef;
use crate::hunk::{check_hunk_order, Hunk};
use crate::kind::DeltaKind;

/// The change between the old and new version of one file.
///
/// A `DeltaRecord` can only be obtained through [`DeltaRecord::build`] (or
/// deserialization, which goes through `build`), so every value satisfies
/// the side, rename and hunk invariants of its [`DeltaKind`]. It has no
/// setters: once built it never changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DeltaParts", into = "DeltaParts")]
pub struct DeltaRecord {
    old_file: Option<FileRef>,
    new_file: Option<FileRef>,
    kind: DeltaKind,
    hunks: Vec<Hunk>,
}

/// Unvalidated inputs of a [`DeltaRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaParts {
    pub old_file: Option<FileRef>,
    pub new_file: Option<FileRef>,
    pub kind: DeltaKind,
    #[serde(default)]
    pub hunks: Vec<Hunk>,
}

impl DeltaParts {
    pub fn build(self) -> DeltaResult<DeltaRecord> {
        DeltaRecord::build(self.old_file, self.new_file, self.kind, self.hunks)
    }
}

/// Paths touched by a delta, one per existing side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffectedPaths<'a> {
    pub old_path: Option<&'a str>,
    pub new_path: Option<&'a str>,
}

impl DeltaRecord {
    /// Validate the inputs and assemble a record.
    ///
    /// Checks run in a fixed order and the first violation is returned:
    /// side presence, degenerate rename, hunks on a contentless kind, hunk
    /// ordering. Inputs are stored as given.
    pub fn build(
        old_file: Option<FileRef>,
        new_file: Option<FileRef>,
        kind: DeltaKind,
        hunks: Vec<Hunk>,
    ) -> DeltaResult<Self> {
        check_side(kind, Side::Old, old_file.is_some())?;
        check_side(kind, Side::New, new_file.is_some())?;

        if kind == DeltaKind::Renamed {
            if let (Some(old), Some(new)) = (&old_file, &new_file) {
                if old.path() == new.path() {
                    return Err(DeltaError::DegenerateRename {
                        path: old.path().to_string(),
                    });
                }
            }
        }

        if kind.forbids_hunks() && !hunks.is_empty() {
            return Err(DeltaError::EmptyHunksExpectedButPresent {
                kind,
                count: hunks.len(),
            });
        }

        check_hunk_order(&hunks)?;

        Ok(Self {
            old_file,
            new_file,
            kind,
            hunks,
        })
    }

    pub fn old_file(&self) -> Option<&FileRef> {
        self.old_file.as_ref()
    }

    pub fn new_file(&self) -> Option<&FileRef> {
        self.new_file.as_ref()
    }

    pub fn kind(&self) -> DeltaKind {
        self.kind
    }

    /// Hunks in ascending old-side order.
    pub fn hunks(&self) -> &[Hunk] {
        &self.hunks
    }

    pub fn affected_paths(&self) -> AffectedPaths<'_> {
        AffectedPaths {
            old_path: self.old_file.as_ref().map(FileRef::path),
            new_path: self.new_file.as_ref().map(FileRef::path),
        }
    }

    /// The path a listing would show: the new side, else the old side.
    pub fn path(&self) -> Option<&str> {
        self.new_file
            .as_ref()
            .or(self.old_file.as_ref())
            .map(FileRef::path)
    }

    /// Sum of new-side line counts over all hunks.
    pub fn total_lines_changed(&self) -> u64 {
        self.hunks.iter().map(|h| u64::from(h.new_count)).sum()
    }

    /// A rename that kept the content unchanged.
    pub fn is_pure_rename(&self) -> bool {
        match (self.kind, &self.old_file, &self.new_file) {
            (DeltaKind::Renamed, Some(old), Some(new)) => old.same_content(new),
            _ => false,
        }
    }

    pub fn into_parts(self) -> DeltaParts {
        DeltaParts {
            old_file: self.old_file,
            new_file: self.new_file,
            kind: self.kind,
            hunks: self.hunks,
        }
    }
}

fn check_side(kind: DeltaKind, side: Side, present: bool) -> DeltaResult<()> {
    let expected = match side {
        Side::Old => kind.old_side(),
        Side::New => kind.new_side(),
    };
    if expected.admits(present) {
        Ok(())
    } else {
        Err(DeltaError::InvalidSideForKind {
            kind,
            side,
            expected,
        })
    }
}

impl TryFrom<DeltaParts> for DeltaRecord {
    type Error = DeltaError;

    fn try_from(parts: DeltaParts) -> Result<Self, Self::Error> {
        parts.build()
    }
}

impl From<DeltaRecord> for DeltaParts {
    fn from(record: DeltaRecord) -> Self {
        record.into_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::SideRule;
    use minigit_types::Oid;
    use proptest::prelude::*;

    fn oid(b: u8) -> Oid {
        Oid::from_raw([b; 20])
    }

    fn file(path: &str, b: u8) -> FileRef {
        FileRef::new(path, oid(b))
    }

    #[test]
    fn added_file_projects_new_path_only() {
        let new = file("a.txt", 0xab).with_size(10);
        let delta = DeltaRecord::build(None, Some(new.clone()), DeltaKind::Added, vec![]).unwrap();

        assert_eq!(
            delta.affected_paths(),
            AffectedPaths {
                old_path: None,
                new_path: Some("a.txt")
            }
        );
        assert_eq!(delta.new_file(), Some(&new));
        assert_eq!(delta.path(), Some("a.txt"));
        assert_eq!(delta.total_lines_changed(), 0);
    }

    #[test]
    fn added_with_old_side_rejected() {
        let err = DeltaRecord::build(
            Some(file("a.txt", 1)),
            Some(file("a.txt", 2)),
            DeltaKind::Added,
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DeltaError::InvalidSideForKind {
                kind: DeltaKind::Added,
                side: Side::Old,
                expected: SideRule::Absent,
            }
        );
    }

    #[test]
    fn deleted_with_new_side_rejected() {
        let err = DeltaRecord::build(
            Some(file("gone.txt", 1)),
            Some(file("gone.txt", 0)),
            DeltaKind::Deleted,
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DeltaError::InvalidSideForKind {
                side: Side::New,
                ..
            }
        ));
    }

    #[test]
    fn deleted_file_projects_old_path() {
        let delta =
            DeltaRecord::build(Some(file("gone.txt", 1)), None, DeltaKind::Deleted, vec![])
                .unwrap();
        assert_eq!(delta.affected_paths().new_path, None);
        assert_eq!(delta.path(), Some("gone.txt"));
    }

    #[test]
    fn modified_needs_both_sides() {
        let err = DeltaRecord::build(None, Some(file("m.rs", 1)), DeltaKind::Modified, vec![])
            .unwrap_err();
        assert!(matches!(
            err,
            DeltaError::InvalidSideForKind {
                kind: DeltaKind::Modified,
                side: Side::Old,
                expected: SideRule::Present,
            }
        ));
    }

    #[test]
    fn pairwise_kinds_reject_a_missing_side() {
        for kind in [
            DeltaKind::Modified,
            DeltaKind::Renamed,
            DeltaKind::Copied,
            DeltaKind::TypeChanged,
            DeltaKind::Conflicted,
        ] {
            let missing_old =
                DeltaRecord::build(None, Some(file("new.txt", 2)), kind, vec![]).unwrap_err();
            assert_eq!(
                missing_old,
                DeltaError::InvalidSideForKind {
                    kind,
                    side: Side::Old,
                    expected: SideRule::Present,
                },
                "{kind}"
            );

            let missing_new =
                DeltaRecord::build(Some(file("old.txt", 1)), None, kind, vec![]).unwrap_err();
            assert_eq!(
                missing_new,
                DeltaError::InvalidSideForKind {
                    kind,
                    side: Side::New,
                    expected: SideRule::Present,
                },
                "{kind}"
            );

            let both = DeltaRecord::build(
                Some(file("old.txt", 1)),
                Some(file("new.txt", 2)),
                kind,
                vec![],
            );
            assert!(both.is_ok(), "{kind}");
        }
    }

    #[test]
    fn modified_with_adjacent_hunks() {
        let hunks = vec![Hunk::new(0, 5, 0, 6), Hunk::new(5, 2, 6, 2)];
        let delta = DeltaRecord::build(
            Some(file("m.rs", 1)),
            Some(file("m.rs", 2)),
            DeltaKind::Modified,
            hunks.clone(),
        )
        .unwrap();
        assert_eq!(delta.hunks(), hunks.as_slice());
        assert_eq!(delta.total_lines_changed(), 8);
    }

    #[test]
    fn modified_with_overlapping_hunks() {
        let err = DeltaRecord::build(
            Some(file("m.rs", 1)),
            Some(file("m.rs", 2)),
            DeltaKind::Modified,
            vec![Hunk::new(0, 5, 0, 6), Hunk::new(4, 2, 6, 2)],
        )
        .unwrap_err();
        assert_eq!(err, DeltaError::HunkOverlapOrDisorder { index: 1 });
    }

    #[test]
    fn rename_to_same_path_rejected() {
        let err = DeltaRecord::build(
            Some(file("same.txt", 1)),
            Some(file("same.txt", 1)),
            DeltaKind::Renamed,
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DeltaError::DegenerateRename {
                path: "same.txt".into()
            }
        );
    }

    #[test]
    fn pure_rename_and_rename_with_edit() {
        let pure = DeltaRecord::build(
            Some(file("old.txt", 1)),
            Some(file("new.txt", 1)),
            DeltaKind::Renamed,
            vec![],
        )
        .unwrap();
        assert!(pure.is_pure_rename());

        let edited = DeltaRecord::build(
            Some(file("old.txt", 1)),
            Some(file("new.txt", 2)),
            DeltaKind::Renamed,
            vec![Hunk::new(3, 1, 3, 1)],
        )
        .unwrap();
        assert!(!edited.is_pure_rename());
        assert_eq!(edited.total_lines_changed(), 1);
    }

    #[test]
    fn copy_may_keep_path() {
        // Only renames are checked for identical paths.
        let delta = DeltaRecord::build(
            Some(file("src.txt", 1)),
            Some(file("src.txt", 1)),
            DeltaKind::Copied,
            vec![],
        );
        assert!(delta.is_ok());
    }

    #[test]
    fn contentless_kinds_reject_hunks() {
        for kind in [
            DeltaKind::Unmodified,
            DeltaKind::Ignored,
            DeltaKind::Untracked,
            DeltaKind::Unreadable,
        ] {
            let err = DeltaRecord::build(
                None,
                Some(file("x", 1)),
                kind,
                vec![Hunk::new(0, 0, 0, 1)],
            )
            .unwrap_err();
            assert_eq!(
                err,
                DeltaError::EmptyHunksExpectedButPresent { kind, count: 1 }
            );
        }
    }

    #[test]
    fn untracked_without_old_side() {
        let delta =
            DeltaRecord::build(None, Some(file("new.log", 3)), DeltaKind::Untracked, vec![])
                .unwrap();
        assert_eq!(delta.kind(), DeltaKind::Untracked);
        assert!(delta.old_file().is_none());
    }

    #[test]
    fn conflicted_may_carry_hunks() {
        let delta = DeltaRecord::build(
            Some(file("c.txt", 1)),
            Some(file("c.txt", 2)),
            DeltaKind::Conflicted,
            vec![Hunk::new(1, 2, 1, 7).with_header("@@ -1,2 +1,7 @@")],
        )
        .unwrap();
        assert_eq!(delta.total_lines_changed(), 7);
    }

    #[test]
    fn side_errors_take_precedence_over_hunk_errors() {
        let err = DeltaRecord::build(
            Some(file("a", 1)),
            Some(file("a", 2)),
            DeltaKind::Added,
            vec![Hunk::new(5, 5, 5, 5), Hunk::new(0, 1, 0, 1)],
        )
        .unwrap_err();
        assert!(matches!(err, DeltaError::InvalidSideForKind { .. }));
    }

    #[test]
    fn deserialization_validates() {
        let valid = r#"{
            "old_file": null,
            "new_file": {"path": "a.txt", "oid": "abc1230000000000000000000000000000000000", "size": 10, "mode": "Blob"},
            "kind": "Added"
        }"#;
        let delta: DeltaRecord = serde_json::from_str(valid).unwrap();
        assert_eq!(delta.affected_paths().new_path, Some("a.txt"));

        let invalid = r#"{
            "old_file": null,
            "new_file": null,
            "kind": "Modified"
        }"#;
        assert!(serde_json::from_str::<DeltaRecord>(invalid).is_err());
    }

    #[test]
    fn serializes_through_parts() {
        let delta = DeltaRecord::build(
            Some(file("m.rs", 1)),
            Some(file("m.rs", 2)),
            DeltaKind::Modified,
            vec![Hunk::new(0, 1, 0, 1)],
        )
        .unwrap();
        let json = serde_json::to_value(&delta).unwrap();
        assert_eq!(json["kind"], "Modified");
        assert_eq!(json["hunks"].as_array().map(Vec::len), Some(1));
        let parsed: DeltaRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, delta);
    }

    fn arb_file() -> impl Strategy<Value = FileRef> {
        ("[a-z]{1,8}\\.txt", any::<u8>(), 0u64..10_000)
            .prop_map(|(path, b, size)| FileRef::new(path, oid(b)).with_size(size))
    }

    fn arb_hunks() -> impl Strategy<Value = Vec<Hunk>> {
        proptest::collection::vec((0u32..20, 0u32..20, 0u32..40), 0..8).prop_map(|specs| {
            let mut old_start = 0;
            specs
                .into_iter()
                .map(|(gap, old_count, new_count)| {
                    old_start += gap;
                    let hunk = Hunk::new(old_start, old_count, old_start, new_count);
                    old_start += old_count;
                    hunk
                })
                .collect()
        })
    }

    /// Inputs that satisfy every construction rule.
    fn arb_valid_parts() -> impl Strategy<Value = DeltaParts> {
        (
            proptest::sample::select(DeltaKind::ALL.to_vec()),
            arb_file(),
            arb_file(),
            any::<bool>(),
            any::<bool>(),
            arb_hunks(),
        )
            .prop_map(|(kind, old, new, keep_old, keep_new, hunks)| {
                let old_file = match kind.old_side() {
                    SideRule::Absent => None,
                    SideRule::Present => Some(old),
                    SideRule::Unconstrained => keep_old.then_some(old),
                };
                let new_file = match kind.new_side() {
                    SideRule::Absent => None,
                    SideRule::Present => Some(new),
                    SideRule::Unconstrained => keep_new.then_some(new),
                };
                let new_file = match (kind, &old_file, new_file) {
                    (DeltaKind::Renamed, Some(o), Some(n)) if o.path() == n.path() => {
                        let path = format!("renamed-{}", n.path());
                        Some(FileRef::new(path, *n.oid()).with_size(n.size()))
                    }
                    (_, _, n) => n,
                };
                let hunks = if kind.forbids_hunks() { Vec::new() } else { hunks };
                DeltaParts {
                    old_file,
                    new_file,
                    kind,
                    hunks,
                }
            })
    }

    proptest! {
        #[test]
        fn valid_inputs_are_stored_verbatim(parts in arb_valid_parts()) {
            let delta = parts.clone().build().unwrap();
            prop_assert_eq!(delta.into_parts(), parts);
        }

        #[test]
        fn rebuilding_is_idempotent(parts in arb_valid_parts()) {
            let delta = parts.build().unwrap();
            let again = delta.clone().into_parts().build().unwrap();
            prop_assert_eq!(again, delta);
        }

        #[test]
        fn added_never_accepts_old_side(old in arb_file(), new in arb_file(), hunks in arb_hunks()) {
            let err = DeltaRecord::build(Some(old), Some(new), DeltaKind::Added, hunks).unwrap_err();
            let is_side_error = matches!(err, DeltaError::InvalidSideForKind { side: Side::Old, .. });
            prop_assert!(is_side_error);
        }

        #[test]
        fn deleted_never_accepts_new_side(old in arb_file(), new in arb_file(), hunks in arb_hunks()) {
            let err = DeltaRecord::build(Some(old), Some(new), DeltaKind::Deleted, hunks).unwrap_err();
            let is_side_error = matches!(err, DeltaError::InvalidSideForKind { side: Side::New, .. });
            prop_assert!(is_side_error);
        }

        #[test]
        fn total_lines_is_new_side_sum(parts in arb_valid_parts()) {
            let expected: u64 = parts.hunks.iter().map(|h| u64::from(h.new_count)).sum();
            let delta = parts.build().unwrap();
            prop_assert_eq!(delta.total_lines_changed(), expected);
        }
    }
}
