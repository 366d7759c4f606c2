//! Customer reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ReviewId;

/// A customer review of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub customer_name: String,
    /// Star rating. The store keeps whatever it is given.
    pub rating: i32,
    pub comment: String,
    /// When the review was created. Set by the server, never updated.
    pub date: DateTime<Utc>,
}

/// Input for creating a review.
///
/// There is deliberately no `date` here: the creation time is assigned by the
/// store, and a `date` supplied by a client is dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub customer_name: String,
    pub rating: i32,
    pub comment: String,
}

impl NewReview {
    /// Build the stored record for this input under the given id and time.
    #[must_use]
    pub fn into_review(self, id: ReviewId, date: DateTime<Utc>) -> Review {
        Review {
            id,
            customer_name: self.customer_name,
            rating: self.rating,
            comment: self.comment,
            date,
        }
    }
}
