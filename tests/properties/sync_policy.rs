//! Property tests for the two sync policies on a real disk.

use proptest::prelude::*;
use tempfile::tempdir;

use raspberry_web_deploy::domain::services::SyncPolicyEngine;
use raspberry_web_deploy::domain::value_objects::{CopyKind, SkipReason, SyncOutcome};
use raspberry_web_deploy::infrastructure::LocalFs;

fn contents() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..2048)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after overwrite-if-different the target equals the source,
    /// and a second pass copies nothing.
    #[test]
    fn property_overwrite_converges(
        source_bytes in contents(),
        existing in proptest::option::of(contents()),
    ) {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        std::fs::write(&source, &source_bytes).unwrap();
        if let Some(existing) = &existing {
            std::fs::write(&target, existing).unwrap();
        }

        let engine = SyncPolicyEngine::new(LocalFs::new());
        let first = engine.sync_overwrite_if_different(&source, &target).unwrap();

        let expected = match &existing {
            None => SyncOutcome::Copied(CopyKind::NewFile),
            Some(bytes) if *bytes == source_bytes => SyncOutcome::Skipped(SkipReason::Unchanged),
            Some(_) => SyncOutcome::Copied(CopyKind::NewVersion),
        };
        prop_assert_eq!(first, expected);
        prop_assert_eq!(std::fs::read(&target).unwrap(), source_bytes);

        let second = engine.sync_overwrite_if_different(&source, &target).unwrap();
        prop_assert_eq!(second, SyncOutcome::Skipped(SkipReason::Unchanged));
    }

    /// PROPERTY: create-if-absent never changes an existing target.
    #[test]
    fn property_create_if_absent_preserves_target(
        source_bytes in contents(),
        existing in contents(),
    ) {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        std::fs::write(&source, &source_bytes).unwrap();
        std::fs::write(&target, &existing).unwrap();

        let engine = SyncPolicyEngine::new(LocalFs::new());
        let outcome = engine.sync_create_if_absent(&source, &target).unwrap();

        prop_assert_eq!(outcome, SyncOutcome::Skipped(SkipReason::AlreadyPresent));
        prop_assert_eq!(std::fs::read(&target).unwrap(), existing);
    }
}
