//! Reviews and reviewers.

use serde::{Deserialize, Serialize};

/// A review of exactly one pokemon by at most one reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub title: String,
    pub text: String,
    /// 1 (worst) to 5 (best).
    pub rating: u8,
    pub pokemon_id: u32,
    /// Reviews attached at creation time have no reviewer yet.
    pub reviewer_id: Option<u32>,
}

/// Review payload submitted with a creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub title: String,
    pub text: String,
    pub rating: u8,
}

/// A person who writes reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
}
