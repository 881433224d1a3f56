//! Duplicate suppression for re-captured messages.

use ridelog_core::RawMessage;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// SHA-256 of `date|time|phone`, hex-encoded.
///
/// `None` when the message lacks a time or phone, so it can never collide.
#[must_use]
pub fn dedup_key(message: &RawMessage) -> Option<String> {
    let time = message.conversation_time.as_deref()?;
    let phone = message.phone.as_deref()?;
    let date = message.conversation_date.as_deref().unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(date.as_bytes());
    hasher.update(b"|");
    hasher.update(time.as_bytes());
    hasher.update(b"|");
    hasher.update(phone.as_bytes());
    Some(format!("{:x}", hasher.finalize()))
}

/// Drop later copies of already-seen messages, keeping order.
#[must_use]
pub fn dedup(messages: Vec<RawMessage>) -> Vec<RawMessage> {
    let before = messages.len();
    let mut seen = HashSet::new();
    let kept: Vec<RawMessage> = messages
        .into_iter()
        .filter(|m| dedup_key(m).is_none_or(|key| seen.insert(key)))
        .collect();

    if kept.len() < before {
        tracing::info!("Dropped {} duplicate messages", before - kept.len());
    }
    kept
}
