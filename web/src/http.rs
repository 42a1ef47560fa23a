use gloo::net::http::Request;
use jeopardy_core as trivia;

use trivia::{CategoryDetail, CategoryId, CategorySummary, FetchError, TriviaApi};

/// [`TriviaApi`] over the browser's `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaApi {
    base_url: String,
}

impl HttpTriviaApi {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))
    }
}

impl Default for HttpTriviaApi {
    fn default() -> Self {
        Self::new(trivia::DEFAULT_BASE_URL)
    }
}

impl TriviaApi for HttpTriviaApi {
    async fn categories(&self, count: usize) -> Result<Vec<CategorySummary>, FetchError> {
        let body = self.get(&trivia::categories_path(count)).await?;
        trivia::parse_categories(&body)
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, FetchError> {
        let body = self.get(&trivia::category_path(id)).await?;
        trivia::parse_category(&body)
    }
}
