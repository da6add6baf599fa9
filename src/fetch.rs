use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::api::{clean_text, TriviaApi};
use crate::error::{GameError, Result};
use crate::model::{Category, CategoryId, Clue};

#[derive(Debug, Clone, PartialEq)]
pub struct FetchSettings {
    pub categories: usize,
    pub clues_per_category: usize,
    /// Random offsets are drawn from `0..offset_range`.
    pub offset_range: u32,
    /// Upper bound on list requests per startup; `None` re-draws forever.
    pub max_draws: Option<u32>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            categories: 6,
            clues_per_category: 5,
            offset_range: 1000,
            max_draws: Some(100),
        }
    }
}

/// Shared flag a restart flips to abandon an in-flight startup.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(GameError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Draw random categories until `settings.categories` distinct ones with at
/// least `settings.clues_per_category` clues have been found.
pub fn fetch_category_ids<A, R>(
    api: &A,
    rng: &mut R,
    settings: &FetchSettings,
    cancel: &CancelToken,
) -> Result<Vec<CategoryId>>
where
    A: TriviaApi + ?Sized,
    R: Rng + ?Sized,
{
    let wanted = settings.categories;
    let mut ids: Vec<CategoryId> = Vec::with_capacity(wanted);
    let mut seen: HashSet<CategoryId> = HashSet::new();
    let mut draws = 0u32;

    while ids.len() < wanted {
        if let Some(max) = settings.max_draws {
            if draws >= max {
                return Err(GameError::CategoryPoolExhausted {
                    wanted,
                    found: ids.len(),
                    draws,
                });
            }
        }
        cancel.check()?;

        let offset = rng.gen_range(0..settings.offset_range.max(1));
        draws += 1;

        match api.random_category(offset)? {
            None => {
                debug!(offset, "no category at offset, drawing again");
            }
            Some(summary) if summary.clues_count < settings.clues_per_category => {
                warn!(
                    id = summary.id,
                    clues = summary.clues_count,
                    "rejecting undersized category"
                );
            }
            Some(summary) if !seen.insert(summary.id) => {
                debug!(id = summary.id, "category drawn twice, drawing again");
            }
            Some(summary) => {
                debug!(id = summary.id, title = %summary.title, "category accepted");
                ids.push(summary.id);
            }
        }
    }

    info!(draws, count = ids.len(), "category ids fetched");
    Ok(ids)
}

/// Fetch every category in `ids` order, shuffle its clues and keep exactly
/// `settings.clues_per_category` of them.
pub fn fetch_clue_sets<A, R>(
    api: &A,
    rng: &mut R,
    ids: &[CategoryId],
    settings: &FetchSettings,
    cancel: &CancelToken,
) -> Result<Vec<Category>>
where
    A: TriviaApi + ?Sized,
    R: Rng + ?Sized,
{
    let mut categories = Vec::with_capacity(ids.len());

    for &id in ids {
        cancel.check()?;
        let details = api.category(id)?;

        let mut clues: Vec<Clue> = details
            .clues
            .into_iter()
            .filter_map(|c| {
                let question = clean_text(c.question.as_deref()?);
                let answer = clean_text(c.answer.as_deref()?);
                if question.is_empty() || answer.is_empty() {
                    None
                } else {
                    Some(Clue::new(question, answer))
                }
            })
            .collect();

        if clues.len() < settings.clues_per_category {
            return Err(GameError::Malformed(format!(
                "category {} has {} usable clues, need {}",
                id,
                clues.len(),
                settings.clues_per_category
            )));
        }

        clues.shuffle(rng);
        clues.truncate(settings.clues_per_category);

        categories.push(Category {
            title: clean_text(&details.title),
            clues,
        });
    }

    info!(count = categories.len(), "clue sets fetched");
    Ok(categories)
}
