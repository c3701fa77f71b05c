//! Reporting surface tests: JSON summary shape and tally consistency.

use vigil::report::summary_json;
use vigil::{FnTest, Session, Verdict};

#[test]
fn json_summary_reflects_session_state() {
    let mut session = Session::new();
    session.start().unwrap();
    session
        .run_test(&FnTest::new("pass_one", |_| Verdict::Pass))
        .unwrap();
    session
        .run_test(&FnTest::new("fail_one", |_| Verdict::fail("nope")))
        .unwrap();
    session.end().unwrap();

    let json = summary_json(&session).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["total"], 2);
    assert_eq!(parsed["passed"], 1);
    assert_eq!(parsed["failed"], 1);
    assert!(parsed["elapsed_ms"].as_f64().unwrap() >= 0.0);

    let results = parsed["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["test"], "pass_one");
    assert_eq!(results[0]["outcome"], "pass");
    assert_eq!(results[1]["outcome"], "fail");
    assert_eq!(results[1]["message"], "nope");
    assert_eq!(results[1]["line"], "fail_one FAIL: nope");
}

#[test]
fn json_summary_of_untimed_session_has_null_elapsed() {
    let session = Session::new();
    let json = summary_json(&session).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed["elapsed_ms"].is_null());
    assert_eq!(parsed["total"], 0);
}
