//! Shared utilities for integration tests.

pub mod harness;

use harness::{TestEnv, TestNote};

/// Builds the six-note corpus used across the `find` scenario tests.
///
/// | file   | title              | created    | notes              |
/// |--------|--------------------|------------|--------------------|
/// | a/1.md | this is title      | 2018-10-27 |                    |
/// | b/2.md | this is title      | 2018-10-30 | body has gubergren |
/// | c/3.md | this is title      | 2018-10-31 |                    |
/// | a/4.md | This is title      | 2018-10-20 |                    |
/// | c/5.md | this is title too  | 2018-10-28 | tag a-bit-long     |
/// | b/6.md | text from b/6 note | 2118-10-30 |                    |
#[allow(dead_code)]
pub fn scenario_env() -> TestEnv {
    let env = TestEnv::new();
    env.add_note(&TestNote::new("a", "1.md", "this is title").created("2018-10-27T11:37:45+09:00"));
    env.add_note(
        &TestNote::new("b", "2.md", "this is title")
            .created("2018-10-30T11:37:45+09:00")
            .body("Written by gubergren."),
    );
    env.add_note(&TestNote::new("c", "3.md", "this is title").created("2018-10-31T11:37:45+09:00"));
    env.add_note(&TestNote::new("a", "4.md", "This is title").created("2018-10-20T11:37:45+09:00"));
    env.add_note(
        &TestNote::new("c", "5.md", "this is title too")
            .created("2018-10-28T11:37:45+09:00")
            .tag("a-bit-long"),
    );
    env.add_note(&TestNote::new("b", "6.md", "text from b/6 note").created("2118-10-30T11:37:45+09:00"));
    env
}
