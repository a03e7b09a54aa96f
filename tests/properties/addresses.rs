//! Property tests for unit address parsing and artifact naming.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use conveyor::models::{UnitAddress, UNIT_SUFFIX};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any two plain segments form a unit address that remembers
    /// both halves and rebuilds its source path.
    #[test]
    fn property_two_segments_round_trip(ns in segment(), file in segment()) {
        let path = PathBuf::from(&ns).join(&file);
        let addr = UnitAddress::from_relative(&path).expect("two plain segments always parse");

        prop_assert_eq!(&addr.namespace, &ns);
        prop_assert_eq!(&addr.filename, &file);
        prop_assert_eq!(
            addr.source_path(Path::new("configs")),
            Path::new("configs").join(&ns).join(&file)
        );
    }

    /// PROPERTY: Deeper nesting is never a unit.
    #[test]
    fn property_deep_paths_are_rejected(
        segments in proptest::collection::vec(segment(), 3..6)
    ) {
        let path: PathBuf = segments.iter().collect();
        prop_assert_eq!(UnitAddress::from_relative(&path), None);
    }

    /// PROPERTY: A lone filename at the source root is never a unit.
    #[test]
    fn property_single_segment_rejected(file in segment()) {
        prop_assert_eq!(UnitAddress::from_relative(Path::new(&file)), None);
    }

    /// PROPERTY: Address parsing never panics on arbitrary path text.
    #[test]
    fn property_from_relative_never_panics(s in "(?s).{0,256}") {
        let _ = UnitAddress::from_relative(Path::new(&s));
    }

    /// PROPERTY: Artifact base names carry no dots, so the `.json` and
    /// `.s1.yaml` extensions start at a predictable place.
    #[test]
    fn property_base_name_has_no_dots(
        stem in "[a-z][a-z0-9_-]{0,12}",
        version in "[0-9]{1,3}(\\.[0-9]{1,3}){0,3}",
    ) {
        let addr = UnitAddress::new("ns", format!("{}{}", stem, UNIT_SUFFIX));
        let base = addr.base_name(&version);

        prop_assert!(!base.contains('.'));
        prop_assert!(base.starts_with(&stem));
        prop_assert_eq!(base, format!("{}_v{}", stem, version.replace('.', "-")));
    }

    /// PROPERTY: Version mangling is reversible for dot-separated versions.
    #[test]
    fn property_version_mangle_round_trips(
        version in "[0-9]{1,3}(\\.[0-9]{1,3}){0,3}"
    ) {
        let addr = UnitAddress::new("ns", "unit.s1.yaml");
        let base = addr.base_name(&version);
        let mangled = base.strip_prefix("unit_v").expect("base name starts with stem");

        prop_assert_eq!(mangled.replace('-', "."), version);
    }
}
