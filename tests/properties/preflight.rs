//! Property tests for whole runs against a staged prefix.

use std::path::Path;

use proptest::prelude::*;
use tempfile::tempdir;

use raspberry_web_deploy::infrastructure::LocalFs;
use raspberry_web_deploy::{DeployError, DeployLayout, DeployUseCase, Platform};

const SOURCES: [&str; 4] = [
    "target/release/raspberry-web",
    "config/configuration.toml",
    "raspberry-web-db/raspberry-web.sqlite",
    "config/raspberry-web.service",
];

fn write(path: &Path, content: &[u8]) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn staged_entries(stage: &Path) -> usize {
    std::fs::read_dir(stage).unwrap().count()
}

fn platform() -> impl Strategy<Value = Platform> {
    prop_oneof![Just(Platform::Linux), Just(Platform::Darwin)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: if any source is missing the run fails and nothing is written.
    #[test]
    fn property_missing_source_writes_nothing(
        present in proptest::array::uniform4(any::<bool>()),
        platform in platform(),
    ) {
        prop_assume!(present.iter().any(|p| !p));

        let root = tempdir().unwrap();
        let stage = tempdir().unwrap();
        for (source, keep) in SOURCES.iter().zip(present) {
            if keep {
                write(&root.path().join(source), source.as_bytes());
            }
        }

        let layout = DeployLayout::new(root.path())
            .with_destdir(Some(stage.path().to_path_buf()));
        let use_case = DeployUseCase::new(LocalFs::new(), platform, layout.items());

        let result = use_case.execute();

        let is_missing_source = matches!(result, Err(DeployError::MissingSource { .. }));
        prop_assert!(is_missing_source);
        prop_assert_eq!(staged_entries(stage.path()), 0);
    }

    /// PROPERTY: a second run over the same tree copies nothing.
    #[test]
    fn property_rerun_is_idempotent(
        binary in proptest::collection::vec(any::<u8>(), 1..512),
        platform in platform(),
    ) {
        let root = tempdir().unwrap();
        let stage = tempdir().unwrap();
        for source in SOURCES {
            write(&root.path().join(source), source.as_bytes());
        }
        write(&root.path().join(SOURCES[0]), &binary);

        let layout = DeployLayout::new(root.path())
            .with_destdir(Some(stage.path().to_path_buf()));
        let use_case = DeployUseCase::new(LocalFs::new(), platform, layout.items());

        let first = use_case.execute().unwrap();
        let expected_copies = if platform == Platform::Linux { 4 } else { 3 };
        prop_assert_eq!(first.copied_count(), expected_copies);

        let second = use_case.execute().unwrap();
        prop_assert_eq!(second.copied_count(), 0);
        prop_assert_eq!(second.created_dir_count(), 0);
        prop_assert_eq!(second.skipped_count(), expected_copies);
    }
}
