//! Review gating.

use chrono::{DateTime, Utc};

/// An appointment may receive or lose a rating only once it has concluded.
/// Ending at exactly `now` counts as concluded, matching the classifier's
/// completed bucket.
pub fn can_review(end_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    end_time <= now
}
