use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::*;

/// In-memory trivia service with per-endpoint call counters.
#[derive(Debug, Default)]
pub(crate) struct ScriptedApi {
    summaries: Option<Vec<CategorySummary>>,
    details: HashMap<CategoryId, CategoryDetail>,
    failing: HashMap<CategoryId, FetchError>,
    pub(crate) category_list_calls: Cell<usize>,
    pub(crate) category_calls: RefCell<Vec<CategoryId>>,
}

impl ScriptedApi {
    /// Service holding `categories` categories, each with `clues` clues.
    pub(crate) fn with_categories(categories: u64, clues: usize) -> Self {
        let mut api = Self::default();
        let mut summaries = Vec::new();
        for id in 1..=categories {
            summaries.push(summary(id));
            api.details.insert(id, detail(id, clues));
        }
        api.summaries = Some(summaries);
        api
    }

    /// Service listing `total` summaries that cycle over `distinct` ids.
    pub(crate) fn with_repeated_ids(distinct: u64, total: usize, clues: usize) -> Self {
        let mut api = Self::with_categories(distinct, clues);
        api.summaries = Some(
            (1..=distinct)
                .cycle()
                .take(total)
                .map(summary)
                .collect(),
        );
        api
    }

    /// Service whose category list endpoint is down.
    pub(crate) fn unavailable() -> Self {
        Self::default()
    }

    pub(crate) fn fail_category(mut self, id: CategoryId, err: FetchError) -> Self {
        self.failing.insert(id, err);
        self
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.category_list_calls.get() + self.category_calls.borrow().len()
    }
}

impl TriviaApi for ScriptedApi {
    async fn categories(&self, _count: usize) -> Result<Vec<CategorySummary>, FetchError> {
        self.category_list_calls.set(self.category_list_calls.get() + 1);
        self.summaries.clone().ok_or(FetchError::Status(503))
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, FetchError> {
        self.category_calls.borrow_mut().push(id);
        if let Some(err) = self.failing.get(&id) {
            return Err(err.clone());
        }
        self.details.get(&id).cloned().ok_or(FetchError::Status(404))
    }
}

pub(crate) fn summary(id: CategoryId) -> CategorySummary {
    CategorySummary {
        id,
        title: format!("category {}", id),
        clues_count: None,
    }
}

pub(crate) fn detail(id: CategoryId, clues: usize) -> CategoryDetail {
    CategoryDetail {
        id: Some(id),
        title: format!("category {}", id),
        clues: (0..clues)
            .map(|n| ClueRecord {
                question: format!("q{}-{}", id, n),
                answer: format!("a{}-{}", id, n),
                value: Some(100 * (n as u32 + 1)),
            })
            .collect(),
    }
}
