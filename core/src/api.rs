//! Wire format of the trivia service and the transport seam used to reach it.
//!
//! The service exposes two endpoints:
//!
//! - `GET {base}/api/categories?count=N`: a JSON array of category summaries.
//! - `GET {base}/api/category?id=ID`: one category with every clue it has.
//!
//! Only the fields the board needs are decoded, everything else is ignored.

use serde::{Deserialize, Deserializer};

use crate::FetchError;

/// Default address of the trivia service.
pub const DEFAULT_BASE_URL: &str = "http://jservice.io";

/// Identifier the service assigns to a category.
pub type CategoryId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub clues_count: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryDetail {
    #[serde(default)]
    pub id: Option<CategoryId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClueRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    #[serde(default)]
    pub value: Option<u32>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn categories_path(count: usize) -> String {
    format!("/api/categories?count={}", count)
}

pub fn category_path(id: CategoryId) -> String {
    format!("/api/category?id={}", id)
}

pub fn parse_categories(body: &str) -> Result<Vec<CategorySummary>, FetchError> {
    serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))
}

pub fn parse_category(body: &str) -> Result<CategoryDetail, FetchError> {
    serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))
}

/// Transport to the trivia service.
///
/// Implementations only move bytes and decode them, sampling happens in
/// [`crate::CategoryFetcher`]. Futures are not required to be `Send`, the
/// browser runs everything on one thread.
#[allow(async_fn_in_trait)]
pub trait TriviaApi {
    async fn categories(&self, count: usize) -> Result<Vec<CategorySummary>, FetchError>;

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, FetchError>;
}

impl<T: TriviaApi + ?Sized> TriviaApi for &T {
    async fn categories(&self, count: usize) -> Result<Vec<CategorySummary>, FetchError> {
        (**self).categories(count).await
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, FetchError> {
        (**self).category(id).await
    }
}
