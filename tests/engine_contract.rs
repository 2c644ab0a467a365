//! End-to-end contract tests against the public engine API: the concrete
//! screening-call cases, idempotence, and the always-well-formed guarantee.

use candidex::{CtcValue, ExtractionEngine, Interested};

fn engine() -> ExtractionEngine {
    ExtractionEngine::new()
}

#[test]
fn notice_period_two_months() {
    let attrs = engine().extract("My notice period is 2 months.", "full conversation");
    assert_eq!(attrs.notice_period.as_deref(), Some("2 months"));
}

#[test]
fn immediate_joining() {
    let attrs = engine().extract("I can join immediately", "full conversation");
    assert_eq!(attrs.notice_period.as_deref(), Some("Immediate"));
}

#[test]
fn current_and_expected_ctc() {
    let attrs = engine().extract("My current CTC is 8.5 lakh and expected is 12 lakh", "ctc");
    assert_eq!(attrs.current_ctc, Some(CtcValue::Lpa(8.5)));
    assert_eq!(attrs.expected_ctc, Some(CtcValue::Lpa(12.0)));
    assert_eq!(attrs.current_ctc.unwrap().to_string(), "8.5 LPA");
    assert_eq!(attrs.expected_ctc.unwrap().to_string(), "12.0 LPA");
}

#[test]
fn definite_interest() {
    let attrs = engine().extract("Yes I am definitely interested", "full conversation");
    assert_eq!(attrs.interested, Some(Interested::Yes));
}

#[test]
fn availability_day_and_time() {
    let attrs = engine().extract("I am available Monday at 2pm", "available");
    let availability = attrs.availability.expect("availability should resolve");
    assert_eq!(availability.day.as_deref(), Some("monday"));
    assert_eq!(availability.time.as_deref(), Some("2:00 PM"));
}

#[test]
fn empty_transcript_any_context() {
    for context in ["full conversation", "interest", "ctc", "available", "???"] {
        let attrs = engine().extract("", context);
        assert!(attrs.is_empty(), "context {context:?} should yield nothing");
        assert_eq!(serde_json::to_string(&attrs).unwrap(), "{}");
    }
}

#[test]
fn extraction_is_idempotent() {
    let engine = engine();
    let transcript = "Sure, 2 to 3 weeks notice, current CTC is 10 lakhs, \
                      expecting 14, free tuesday morning";
    let first = engine.extract(transcript, "full conversation");
    let second = engine.extract(transcript, "full conversation");
    assert_eq!(first, second);
}

#[test]
fn always_well_formed_on_arbitrary_input() {
    let engine = engine();
    let garbage = [
        "",
        "   ",
        "ßßß 🦀 ₹₹₹ 42",
        "a]b[c(d)e{f}g\\h",
        "999999999999999999999999 months",
        "no no no yes no",
    ];
    for transcript in garbage {
        for context in ["full conversation", "interest", "salary", "schedule", "x"] {
            // Must not panic, and must serialize to a well-formed object.
            let attrs = engine.extract(transcript, context);
            serde_json::to_string(&attrs).unwrap();
        }
    }
}

#[test]
fn result_shape_matches_downstream_contract() {
    let attrs = engine().extract(
        "Yes, sounds good. Notice period one month. Current CTC 9 lakhs, \
         looking for 13 lakhs. Interview on 21st March at 14:00 hours.",
        "full conversation",
    );
    let json = serde_json::to_value(&attrs).unwrap();
    assert_eq!(json["interested"], "Yes");
    assert_eq!(json["notice_period"], "1 month");
    assert_eq!(json["current_ctc"], "9.0 LPA");
    assert_eq!(json["expected_ctc"], "13.0 LPA");
    assert_eq!(json["availability"]["day"], "21 march");
    assert_eq!(json["availability"]["time"], "2:00 PM");
}
