//! Extended tests for harness planning
//!
//! Check the properties the runner relies on: one include per source,
//! one registration per discovered test, stable ordering.

use super::*;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use testgen_core::{Config, Error};
use testgen_scan::FakePreprocessor;

fn generator(fake: FakePreprocessor) -> Generator<FakePreprocessor> {
    Generator::new(Config::default(), fake).unwrap()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_plan_layout() {
    let fake = FakePreprocessor::new()
        .with_output("t/parse.c", "test_exit_code_t p1(void) test_exit_code_t p2(void)")
        .with_output("u/type.c", "test_exit_code_t t1(void)");
    let testgen = generator(fake);

    let map = testgen.scan(&["t/parse.c", "u/type.c"]).unwrap();
    let plan = testgen.plan(&map);

    let paths: Vec<_> = plan.iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("t/parse.h"),
            PathBuf::from("u/type.h"),
            PathBuf::from("t/main.c"),
        ]
    );
}

#[test]
fn test_entry_counts_match_sources() {
    let fake = FakePreprocessor::new()
        .with_output("a.c", "test_exit_code_t a1(void) test_exit_code_t a2(void) test_exit_code_t a1(void)")
        .with_output("b.c", "")
        .with_output("c.c", "test_exit_code_t c1(void)");
    let testgen = generator(fake);

    let map = testgen.scan(&["a.c", "b.c", "c.c"]).unwrap();
    let plan = testgen.plan(&map);
    let entry = &plan.last().unwrap().contents;

    // the support header plus one per source
    assert_eq!(count(entry, "#include \""), 1 + 3);
    assert_eq!(count(entry, "add_test("), map.total_tests());
    assert_eq!(map.total_tests(), 4);
    assert_eq!(count(entry, "run_tests(argc, argv);"), 1);
}

#[test]
fn test_registration_order() {
    let fake = FakePreprocessor::new()
        .with_output("first.c", "test_exit_code_t a(void)")
        .with_output("second.c", "test_exit_code_t b(void)\ntest_exit_code_t c(void)");
    let testgen = generator(fake);

    let map = testgen.scan(&["first.c", "second.c"]).unwrap();
    let plan = testgen.plan(&map);
    let entry = &plan.last().unwrap().contents;

    let body = entry.split("{\n").nth(1).unwrap();
    assert_eq!(
        body,
        "    add_test(a);\n\n    add_test(b);\n    add_test(c);\n\n    run_tests(argc, argv);\n}\n"
    );
}

#[test]
fn test_header_matches_discovery() {
    let fake = FakePreprocessor::new()
        .with_output("x.c", "test_exit_code_t alpha(void)\ntest_exit_code_t beta(void)\n");
    let testgen = generator(fake);

    let map = testgen.scan(&["x.c"]).unwrap();
    let plan = testgen.plan(&map);

    assert_eq!(
        plan[0].contents,
        "#ifndef X_H\n#define X_H\n\n#include \"test.h\"\n\nEXPORT_TEST(alpha);\nEXPORT_TEST(beta);\n\n#endif\n"
    );
    assert!(plan[1].contents.contains("    add_test(alpha);\n    add_test(beta);\n"));
}

#[test]
fn test_duplicate_sources_duplicate_work() {
    let fake = FakePreprocessor::new().with_output("a.c", "test_exit_code_t a(void)");
    let testgen = generator(fake);

    let map = testgen.scan(&["a.c", "a.c"]).unwrap();
    let plan = testgen.plan(&map);

    assert_eq!(plan.len(), 3);
    assert_eq!(plan[0], plan[1]);
    assert_eq!(count(&plan[2].contents, "add_test(a);"), 2);
}

#[test]
fn test_no_sources() {
    let testgen = generator(FakePreprocessor::new());
    let sources: [&str; 0] = [];

    assert!(matches!(testgen.scan(&sources), Err(Error::NoInputs)));
    assert!(testgen.plan(&testgen_core::IdMap::new()).is_empty());
    assert!(testgen.extractor().preprocessor().calls().is_empty());
}

#[test]
fn test_custom_output_config() {
    let mut config = Config::default();
    config.output.header_extension = "tests.h".into();
    config.output.entry_file = "runner.c".into();
    let fake = FakePreprocessor::new().with_output("dir/lex.c", "test_exit_code_t l(void)");
    let testgen = Generator::new(config, fake).unwrap();

    let map = testgen.scan(&["dir/lex.c"]).unwrap();
    let plan = testgen.plan(&map);

    assert_eq!(plan[0].path, PathBuf::from("dir/lex.tests.h"));
    assert!(plan[0].contents.starts_with("#ifndef LEX_TESTS_H\n"));
    assert_eq!(plan[1].path, PathBuf::from("dir/runner.c"));
    assert!(plan[1].contents.contains("#include \"lex.tests.h\"\n"));
}
