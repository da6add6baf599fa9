#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use jeopardy::api::{ApiClue, CategoryDetails, CategorySummary, TriviaApi};
use jeopardy::error::{GameError, Result};
use jeopardy::model::CategoryId;

/// Scripted stand-in for the trivia service. Draws are served in order from
/// `draws`; once the script runs out every draw comes back empty.
#[derive(Default)]
pub struct FakeApi {
    draws: Mutex<VecDeque<Option<CategorySummary>>>,
    categories: HashMap<CategoryId, CategoryDetails>,
    failing: HashSet<CategoryId>,
    pub list_calls: Mutex<usize>,
    pub category_calls: Mutex<Vec<CategoryId>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// `n` categories with ids 1..=n, `clues` clues each, drawn in order.
    pub fn standard(n: u64, clues: usize) -> Self {
        let mut api = Self::new();
        for id in 1..=n {
            api = api.with_category(id, clues);
        }
        api
    }

    pub fn with_category(mut self, id: CategoryId, clues: usize) -> Self {
        self.push_draw(id, clues);
        self.categories.insert(id, details(id, clues));
        self
    }

    /// A draw that advertises `clues` clues; no details are registered.
    pub fn with_draw(self, id: CategoryId, clues: usize) -> Self {
        self.push_draw(id, clues);
        self
    }

    pub fn with_empty_draw(self) -> Self {
        self.draws.lock().unwrap().push_back(None);
        self
    }

    pub fn with_details(mut self, details: CategoryDetails) -> Self {
        self.categories.insert(details.id, details);
        self
    }

    pub fn failing_on(mut self, id: CategoryId) -> Self {
        self.failing.insert(id);
        self
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn category_calls(&self) -> Vec<CategoryId> {
        self.category_calls.lock().unwrap().clone()
    }

    fn push_draw(&self, id: CategoryId, clues: usize) {
        self.draws.lock().unwrap().push_back(Some(CategorySummary {
            id,
            title: title(id),
            clues_count: clues,
        }));
    }
}

impl TriviaApi for FakeApi {
    fn random_category(&self, _offset: u32) -> Result<Option<CategorySummary>> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(self.draws.lock().unwrap().pop_front().flatten())
    }

    fn category(&self, id: CategoryId) -> Result<CategoryDetails> {
        self.category_calls.lock().unwrap().push(id);
        if self.failing.contains(&id) {
            return Err(GameError::Network(format!("connection reset fetching {}", id)));
        }
        self.categories
            .get(&id)
            .cloned()
            .ok_or(GameError::Status {
                status: 404,
                url: format!("fake://category?id={}", id),
            })
    }
}

pub fn title(id: CategoryId) -> String {
    format!("Category {}", id)
}

pub fn question(id: CategoryId, n: usize) -> String {
    format!("Question {}-{}", id, n)
}

pub fn answer(id: CategoryId, n: usize) -> String {
    format!("Answer {}-{}", id, n)
}

pub fn details(id: CategoryId, clues: usize) -> CategoryDetails {
    CategoryDetails {
        id,
        title: title(id),
        clues_count: clues,
        clues: (0..clues)
            .map(|n| ApiClue {
                question: Some(question(id, n)),
                answer: Some(answer(id, n)),
            })
            .collect(),
    }
}
