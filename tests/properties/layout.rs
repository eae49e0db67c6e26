//! Property tests for target path staging.

use std::path::PathBuf;

use proptest::prelude::*;

use raspberry_web_deploy::DeployLayout;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,16}")
        .unwrap()
        .prop_filter("no dot segments", |s| s != "." && s != "..")
}

fn abs_dir() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 1..=4)
        .prop_map(|segments| PathBuf::from(format!("/{}", segments.join("/"))))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: with a staging prefix every target lands inside it.
    #[test]
    fn property_targets_stay_under_destdir(
        root in abs_dir(),
        destdir in abs_dir(),
    ) {
        let layout = DeployLayout::new(&root).with_destdir(Some(destdir.clone()));

        for item in layout.items() {
            prop_assert!(item.target_path.starts_with(&destdir));
            prop_assert!(item.source_path.starts_with(&root));
        }
    }

    /// PROPERTY: without a staging prefix targets are the fixed absolute paths.
    #[test]
    fn property_targets_are_fixed_without_destdir(root in abs_dir()) {
        let targets: Vec<PathBuf> = DeployLayout::new(&root)
            .items()
            .into_iter()
            .map(|item| item.target_path)
            .collect();

        prop_assert_eq!(
            targets,
            vec![
                PathBuf::from("/usr/local/bin/raspberry-web"),
                PathBuf::from("/usr/local/raspberry-web/configuration.toml"),
                PathBuf::from("/usr/local/raspberry-web/database/raspberry-web.sqlite"),
                PathBuf::from("/etc/systemd/system/raspberry-web.service"),
            ]
        );
    }
}
