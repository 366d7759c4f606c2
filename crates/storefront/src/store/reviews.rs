//! Review operations.

use chrono::Utc;

use mark_store_core::{NewReview, Review};

use super::CatalogStore;

impl CatalogStore {
    /// List all reviews in creation order.
    #[must_use]
    pub fn get_all_reviews(&self) -> Vec<Review> {
        self.read().reviews.all()
    }

    /// Create a review stamped with the current time.
    ///
    /// Rating and comment are stored as given; range checks belong to the
    /// caller.
    pub fn create_review(&self, input: NewReview) -> Review {
        let date = Utc::now();
        self.write()
            .reviews
            .insert_with(|id| input.into_review(id, date))
    }
}
