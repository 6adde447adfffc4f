//! Parameterised query-id extraction tests.
//!
//! Each `#[case]` is independent — extraction is pure.

use std::path::Path;

use querysync_core::{identifier::extract, QueryId};
use rstest::rstest;

// ---------------------------------------------------------------------------
// Well-formed names
// ---------------------------------------------------------------------------

#[rstest]
#[case("queries/query_3570870.sql", 3570870)]
#[case("queries/query_871114.sql", 871114)]
#[case("q_0.sql", 0)]
#[case("_5.sql", 5)]
#[case("a/b/c/daily_active_users_42.sql", 42)]
#[case("snake_case_name_with_many_parts_1.sql", 1)]
#[case("/abs/path/q_18446744073709551615.sql", u64::MAX)]
fn well_formed_paths_yield_their_id(#[case] path: &str, #[case] expected: u64) {
    assert_eq!(extract(Path::new(path)).expect("extract"), QueryId(expected));
}

#[rstest]
#[case(0)]
#[case(7)]
#[case(1_000_000)]
#[case(u64::MAX / 3)]
fn any_id_round_trips_through_a_file_name(#[case] id: u64) {
    let name = format!("queries/some_query_{id}.sql");
    assert_eq!(extract(Path::new(&name)).expect("extract"), QueryId(id));
}

// ---------------------------------------------------------------------------
// Malformed names
// ---------------------------------------------------------------------------

#[rstest]
#[case::no_underscore("NonExistantFile.sql")]
#[case::no_suffix("queries/query_123")]
#[case::wrong_suffix("queries/query_123.txt")]
#[case::uppercase_suffix("queries/query_123.SQL")]
#[case::no_digits("queries/query_.sql")]
#[case::letters("queries/query_12a.sql")]
#[case::signed("queries/query_-12.sql")]
#[case::trailing_text("queries/query_12.sql.bak")]
#[case::empty("")]
fn malformed_paths_fail_naming_the_path(#[case] path: &str) {
    let err = extract(Path::new(path)).expect_err("must fail");
    assert_eq!(err.path, Path::new(path));
    let msg = err.to_string();
    assert!(msg.contains(&format!("'{path}'")), "must name the path, got: {msg}");
    assert!(msg.contains("*_{queryId}.sql"), "must name the format, got: {msg}");
}

#[test]
fn extraction_is_deterministic() {
    let path = Path::new("queries/query_3570870.sql");
    assert_eq!(extract(path).unwrap(), extract(path).unwrap());
}
