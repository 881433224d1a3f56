//! Per-message orchestration of the extraction stages.

use chrono::{Local, NaiveDate};
use rayon::prelude::*;
use ridelog_core::{Category, EnrichedRecord, ExtractionResult, RawMessage, Result, RideType};
use tracing::{debug, info};

use crate::category::{Classification, classify};
use crate::datetime::{DateTimeExtractor, RideDateTime, reference_date};
use crate::dedup::dedup;
use crate::gazetteer::Gazetteer;
use crate::intent::IntentClassifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Spread messages over the rayon pool. Output order is unaffected.
    pub parallel: bool,
    /// Drop re-captured messages before extraction. Off by default: the
    /// key ignores message text, so it may merge distinct posts.
    pub dedup: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            dedup: false,
        }
    }
}

/// Stateless across messages; the gazetteer is the only shared data.
#[derive(Debug, Clone)]
pub struct Pipeline {
    gazetteer: Gazetteer,
    datetime: DateTimeExtractor,
    intent: IntentClassifier,
    today: NaiveDate,
}

impl Pipeline {
    pub fn new(gazetteer: Gazetteer) -> Result<Self> {
        Ok(Self {
            gazetteer,
            datetime: DateTimeExtractor::new()?,
            intent: IntentClassifier::default(),
            today: Local::now().date_naive(),
        })
    }

    #[must_use]
    pub fn with_intent(mut self, intent: IntentClassifier) -> Self {
        self.intent = intent;
        self
    }

    /// Date used when a message has no usable reference date.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    #[must_use]
    pub const fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    #[must_use]
    pub const fn intent(&self) -> &IntentClassifier {
        &self.intent
    }

    #[must_use]
    pub fn classify(&self, text: &str) -> Classification {
        classify(text, &self.gazetteer)
    }

    #[must_use]
    pub fn extract_datetime(&self, text: &str, reference: Option<&str>) -> RideDateTime {
        self.datetime
            .extract(text, reference_date(reference, self.today))
    }

    #[must_use]
    pub fn classify_intent(&self, text: &str) -> RideType {
        self.intent.classify(text)
    }

    /// Run every stage on one message. Date, time and intent only for rides.
    #[must_use]
    pub fn process(&self, message: &RawMessage) -> ExtractionResult {
        let Classification {
            category,
            origin,
            destination,
        } = self.classify(&message.text);

        if category != Category::Ride {
            return ExtractionResult::general();
        }

        let RideDateTime { date, time } =
            self.extract_datetime(&message.text, message.conversation_date.as_deref());
        let ride_type = self.classify_intent(&message.text);
        debug!(
            origin = origin.as_ref().map(ridelog_core::Place::name),
            destination = destination.as_ref().map(ridelog_core::Place::name),
            ride_type = ride_type.as_str(),
            "ride message"
        );

        ExtractionResult {
            category,
            origin,
            destination,
            ride_date: date,
            ride_time: time,
            ride_type: Some(ride_type),
        }
    }

    /// One result per message, in input order.
    #[must_use]
    pub fn process_batch(&self, messages: &[RawMessage], parallel: bool) -> Vec<ExtractionResult> {
        if parallel {
            messages.par_iter().map(|m| self.process(m)).collect()
        } else {
            messages.iter().map(|m| self.process(m)).collect()
        }
    }

    /// Dedup (optional), extract, and pair each surviving message with its result.
    #[must_use]
    pub fn enrich(&self, messages: Vec<RawMessage>, options: BatchOptions) -> Vec<EnrichedRecord> {
        let messages = if options.dedup {
            dedup(messages)
        } else {
            messages
        };

        let results = self.process_batch(&messages, options.parallel);
        let rides = results.iter().filter(|r| r.is_ride()).count();
        info!("Processed {} messages, {} rides", results.len(), rides);

        messages
            .into_iter()
            .zip(results)
            .map(|(message, result)| EnrichedRecord { message, result })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridelog_core::Place;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn pipeline() -> Pipeline {
        let gazetteer = Gazetteer::parse("state college = sc = happy valley\npittsburgh = pgh")
            .expect("Failed to parse places");
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).expect("Invalid reference date");
        Pipeline::new(gazetteer)
            .expect("Failed to compile patterns")
            .with_today(today)
    }

    #[test]
    fn general_messages_carry_no_ride_fields() {
        let result = pipeline().process(&RawMessage::new("free couch, 5th floor, tomorrow 6pm"));
        assert_eq!(result, ExtractionResult::general());
    }

    #[test]
    fn unparseable_reference_falls_back_to_today() {
        let result =
            pipeline().process(&RawMessage::new("sc to pgh tomorrow").with_date("June 9th"));
        assert_eq!(result.ride_date.as_deref(), Some("2024-06-11"));
        assert_eq!(result.origin, Some(Place::canonical("state college")));
        assert_eq!(result.ride_type, Some(RideType::Unknown));
    }

    #[test]
    fn default_options_keep_one_record_per_input() {
        let same_slot = |text: &str| RawMessage {
            conversation_time: Some("10:01".to_string()),
            phone: Some("5551234".to_string()),
            ..RawMessage::new(text).with_date("2024-06-10")
        };
        let messages = vec![
            same_slot("from sc to pgh tomorrow"),
            same_slot("also have 2 seats back from pgh to sc on sunday"),
        ];

        let records = pipeline().enrich(messages, BatchOptions::default());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].result.origin, Some(Place::canonical("state college")));
        assert_eq!(records[1].result.origin, Some(Place::canonical("pittsburgh")));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let p = pipeline();
        let messages: Vec<RawMessage> = (0..64)
            .map(|i| {
                if i % 3 == 0 {
                    RawMessage::new(format!("from sc to pgh at {}pm", i % 12 + 1))
                } else {
                    RawMessage::new(format!("message number {i}"))
                }
            })
            .collect();
        assert_eq!(p.process_batch(&messages, true), p.process_batch(&messages, false));
    }
}
