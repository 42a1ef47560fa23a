use rand::prelude::*;
use std::collections::HashSet;

use crate::*;

/// Picks random categories and clues out of what the service returns.
///
/// The service cannot hand out random samples itself, so the fetcher asks for a
/// large pool and samples on the client.
pub struct CategoryFetcher<A> {
    api: A,
    rng: SmallRng,
}

impl<A: TriviaApi> CategoryFetcher<A> {
    pub fn with_seed(api: A, seed: u64) -> Self {
        Self {
            api,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Samples [`NUM_CATEGORIES`] distinct ids out of a pool of [`CATEGORY_POOL_SIZE`].
    pub async fn fetch_category_ids(&mut self) -> Result<Vec<CategoryId>, FetchError> {
        let summaries = self
            .api
            .categories(CATEGORY_POOL_SIZE)
            .await
            .inspect_err(|err| log::warn!("could not fetch category list: {}", err))?;

        let mut seen = HashSet::new();
        let pool: Vec<CategoryId> = summaries
            .into_iter()
            .map(|summary| summary.id)
            .filter(|id| seen.insert(*id))
            .collect();

        if pool.len() < NUM_CATEGORIES {
            log::warn!(
                "service returned only {} categories, wanted {}",
                pool.len(),
                NUM_CATEGORIES
            );
        }

        let ids: Vec<CategoryId> = pool
            .choose_multiple(&mut self.rng, NUM_CATEGORIES)
            .copied()
            .collect();
        log::debug!("sampled category ids: {:?}", ids);
        Ok(ids)
    }

    /// Loads one category and keeps [`NUM_CLUES_PER_CATEGORY`] random clues, all hidden.
    pub async fn fetch_category(&mut self, id: CategoryId) -> Result<Category, FetchError> {
        let detail = self
            .api
            .category(id)
            .await
            .inspect_err(|err| log::warn!("could not fetch category {}: {}", id, err))?;

        if detail.clues.len() < NUM_CLUES_PER_CATEGORY {
            log::warn!(
                "category {} has only {} clues, wanted {}",
                id,
                detail.clues.len(),
                NUM_CLUES_PER_CATEGORY
            );
        }

        let clues = detail
            .clues
            .choose_multiple(&mut self.rng, NUM_CLUES_PER_CATEGORY)
            .map(|record| Clue::new(record.question.clone(), record.answer.clone()))
            .collect();

        Ok(Category::new(detail.title, clues))
    }
}
