use keepspec::{Catalog, ClassifiedKeepSpec, KeepSpec, RetentionFlags, access};
use proptest::prelude::*;

// --- Fixed editor catalog ---
// Two template sets (strict keep, name-only keep) and a three-group
// filter catalog, mirroring the shape of a realistic shrinker
// configuration.

pub const CATALOG_SOURCE: &str = r#"
option class/marking/final on
option class/merging/vertical on
option class/merging/horizontal off
option code/simplification/arithmetic on
option code/simplification/cast on
option code/removal/advanced on
option field/propagation/value off

set "Keep" removal off renaming off:
    template "Applications":
        class "com.example.Default"
    template "Serializable classes":
        extends "java.io.Serializable"

set "Keep names" removal on renaming off:
    template "Public classes":
        access "public"

set "Keep members" removal off renaming on:
    template "Annotated classes":
        annotation "com.example.Keep"

set "Keep member names" removal on renaming on:
    template "Enum classes":
        access "enum"
"#;

/// Parse the fixed catalog. Cheap enough to rebuild per test case.
pub fn catalog() -> Catalog {
    Catalog::from_source(CATALOG_SOURCE).expect("fixed catalog should parse")
}

const CLASS_NAMES: &[&str] = &[
    "com/example/Main",
    "com/example/Widget",
    "org/demo/Service",
    "a/B",
];

const EXTENDS_NAMES: &[&str] = &["java/io/Serializable", "java/lang/Object"];

/// Generate one keep spec from small pools, including specs that
/// collide with the fixed catalog's templates so decomposition
/// exercises both toggles and additional rules.
pub fn arb_keep_spec() -> impl Strategy<Value = KeepSpec> {
    (
        prop::option::of(prop::sample::select(CLASS_NAMES).prop_map(str::to_owned)),
        prop::option::of(prop::sample::select(EXTENDS_NAMES).prop_map(str::to_owned)),
        prop::sample::select(&[0_u32, access::PUBLIC, access::PUBLIC | access::FINAL][..]),
        prop::sample::select(&[0_u32, access::FINAL][..]),
    )
        .prop_map(
            |(class_name, extends_class_name, access_flags, inverted_access_flags)| KeepSpec {
                comment: None,
                access_flags,
                inverted_access_flags,
                annotation_type: None,
                class_name,
                extends_annotation_type: None,
                extends_class_name,
            },
        )
}

pub fn arb_flags() -> impl Strategy<Value = RetentionFlags> {
    (any::<bool>(), any::<bool>())
        .prop_map(|(allow_removal, allow_renaming)| RetentionFlags::new(allow_removal, allow_renaming))
}

/// Generate a master rule list, biased so some entries are exact
/// template matches of the fixed catalog.
pub fn arb_rule_list() -> impl Strategy<Value = Vec<ClassifiedKeepSpec>> {
    let template_entry = (0_usize..3, any::<bool>()).prop_map(|(index, strict)| {
        let catalog = catalog();
        let (set, template) = if index < 2 { (0, index) } else { (1, 0) };
        let spec = catalog.sets()[set].templates[template].spec.clone();
        let flags = if strict {
            catalog.sets()[set].flags
        } else {
            RetentionFlags::new(!catalog.sets()[set].flags.allow_removal, false)
        };
        ClassifiedKeepSpec::new(spec, flags)
    });
    let free_entry =
        (arb_keep_spec(), arb_flags()).prop_map(|(spec, flags)| ClassifiedKeepSpec::new(spec, flags));
    prop::collection::vec(
        prop_oneof![2 => template_entry, 3 => free_entry],
        0..12,
    )
}

/// Generate an enabled-state vector sized to the fixed filter catalog.
pub fn arb_filter_states() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 7)
}

/// Generate arbitrary filter-expression text from the characters the
/// codec cares about, to exercise the permissive parser.
pub fn arb_filter_noise() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z/*!,. ]{0,40}").expect("valid regex")
}

/// Sort key for multiset comparison of rule lists.
pub fn sorted(mut records: Vec<ClassifiedKeepSpec>) -> Vec<ClassifiedKeepSpec> {
    records.sort_by_key(|r| format!("{r:?}"));
    records
}
