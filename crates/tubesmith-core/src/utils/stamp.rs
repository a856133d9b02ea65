//! Time-derived identifiers.
//!
//! Accounts and videos are keyed by the millisecond timestamp at which they
//! were created. Two records created within the same millisecond would collide,
//! so the clock here never hands out the same millisecond twice in a process.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Last millisecond handed out by `next_stamp`.
static LAST_MILLIS: AtomicI64 = AtomicI64::new(0);

/// An identifier paired with the instant it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub id: String,
    pub at: DateTime<Utc>,
}

/// Issue a fresh stamp, strictly later than every stamp issued before it.
pub fn next_stamp() -> Stamp {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_MILLIS.load(Ordering::Relaxed);
    let millis = loop {
        let candidate = now.max(last + 1);
        match LAST_MILLIS.compare_exchange_weak(last, candidate, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => break candidate,
            Err(current) => last = current,
        }
    };

    Stamp {
        id: millis.to_string(),
        // Millisecond values from the current clock are always in range
        at: DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_else(Utc::now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamps_are_strictly_increasing() {
        let first = next_stamp();
        let second = next_stamp();
        let third = next_stamp();

        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);
        assert!(first.at < second.at);
        assert!(second.at < third.at);
    }

    #[test]
    fn test_stamp_id_matches_timestamp() {
        let stamp = next_stamp();
        assert_eq!(stamp.id, stamp.at.timestamp_millis().to_string());
    }
}
