//! End-to-end checks of the extraction pipeline on realistic messages.
//!
//! These tests verify that:
//! - explicit and destination-only rides are classified and bound
//! - date/time fields stay absent when the message has no cues
//! - batch processing preserves order, and dedups re-captured messages
//!   only when asked to

use chrono::NaiveDate;
use ridelog_core::{Category, ExtractionResult, Place, RawMessage, RideType};
use ridelog_extract::{
    BatchFormat, BatchOptions, Gazetteer, Pipeline, classify, extract_pair, read_batch,
    write_batch,
};

const PLACES: &str = "state college = sc = happy valley\npittsburgh = pgh\n";

fn pipeline() -> Pipeline {
    let gazetteer = Gazetteer::parse(PLACES).expect("places parse");
    let today = NaiveDate::from_ymd_opt(2024, 3, 20).expect("valid date");
    Pipeline::new(gazetteer)
        .expect("patterns compile")
        .with_today(today)
}

#[test]
fn test_offer_with_date_and_time() {
    let result = pipeline().process(
        &RawMessage::new("driving from SC to Pittsburgh tomorrow at 6:30pm").with_date("2024-03-01"),
    );

    assert_eq!(
        result,
        ExtractionResult {
            category: Category::Ride,
            origin: Some(Place::canonical("state college")),
            destination: Some(Place::canonical("pittsburgh")),
            ride_date: Some("2024-03-02".to_string()),
            ride_time: Some("6:30 pm".to_string()),
            ride_type: Some(RideType::Offering),
        }
    );
}

#[test]
fn test_destination_only_request() {
    let result = pipeline().process(&RawMessage::new("anyone going to pgh this weekend?"));

    assert_eq!(result.category, Category::Ride);
    assert_eq!(result.origin, Some(Place::HomeBase));
    assert_eq!(
        result.origin.as_ref().map(Place::name),
        Some("state college*")
    );
    assert_eq!(result.destination, Some(Place::canonical("pittsburgh")));
    assert_eq!(result.ride_type, Some(RideType::Seeking));
}

#[test]
fn test_general_chatter() {
    let result = pipeline().process(&RawMessage::new("hello everyone, happy Monday!"));
    assert_eq!(result, ExtractionResult::general());
}

#[test]
fn test_ride_without_date_or_time() {
    let result = pipeline().process(&RawMessage::new("from sc to pgh, anyone interested?"));

    assert_eq!(result.category, Category::Ride);
    assert_eq!(result.origin, Some(Place::canonical("state college")));
    assert_eq!(result.destination, Some(Place::canonical("pittsburgh")));
    assert_eq!(result.ride_date, None);
    assert_eq!(result.ride_time, None);
}

#[test]
fn test_pair_implies_ride() {
    let gazetteer = Gazetteer::parse(PLACES).expect("places parse");
    for text in [
        "from happy valley to pgh",
        "SC to PGH friday",
        "need a ride to pittsburgh",
        "pgh to sc, leaving 9am",
    ] {
        if let Some(pair) = extract_pair(text, &gazetteer) {
            assert_ne!(pair.origin, pair.destination, "{text}");
            assert_eq!(classify(text, &gazetteer).category, Category::Ride, "{text}");
        }
    }
}

#[test]
fn test_tomorrow_beats_explicit_date() {
    let result = pipeline()
        .process(&RawMessage::new("sc to pgh on 5th march, or maybe tomorrow").with_date("2024-03-01"));
    assert_eq!(result.ride_date.as_deref(), Some("2024-03-02"));
}

#[test]
fn test_batch_round_trip_preserves_order_and_dedups_on_request() {
    let input = r#"[
        {"message": "from sc to pgh at 5pm", "wa_date": "2024-03-01", "wa_time": "09:00", "phone": "+1 555"},
        {"message": "lost keys near the library", "wa_date": "2024-03-01", "wa_time": "09:05", "phone": "+1 556"},
        {"message": "from sc to pgh at 5pm", "wa_date": "2024-03-01", "wa_time": "09:00", "phone": "+1 555"},
        {"message": "anyone going to happy valley?", "wa_date": "not a date"}
    ]"#;

    let messages = read_batch(input).expect("batch parses");
    let records = pipeline().enrich(
        messages,
        BatchOptions {
            dedup: true,
            ..BatchOptions::default()
        },
    );

    let categories: Vec<Category> = records.iter().map(|r| r.result.category).collect();
    assert_eq!(categories, [Category::Ride, Category::General, Category::Ride]);
    assert_eq!(records[2].message.text, "anyone going to happy valley?");
    assert_eq!(records[2].result.ride_type, Some(RideType::Seeking));

    let mut out = Vec::new();
    write_batch(&records, BatchFormat::JsonArray, &mut out).expect("write succeeds");
    let json: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(json[0]["origin"], "state college");
    assert_eq!(json[0]["ride_time"], "5:pm");
    assert_eq!(json[0]["phone"], "+1 555");
    assert!(json[1]["ride_type"].is_null());
    assert_eq!(json[2]["origin"], "state college*");
}

#[test]
fn test_default_options_keep_every_record() {
    let messages = vec![
        RawMessage {
            conversation_time: Some("09:00".into()),
            phone: Some("1".into()),
            ..RawMessage::new("sc to pgh")
        };
        3
    ];
    let records = pipeline().enrich(messages, BatchOptions::default());
    assert_eq!(records.len(), 3);
}
