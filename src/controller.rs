use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::api::TriviaApi;
use crate::error::{GameError, Result};
use crate::fetch::{self, CancelToken, FetchSettings};
use crate::model::Category;
use crate::session::GameSession;
use crate::state::AppState;

#[derive(Debug)]
pub struct LoadEvent {
    pub generation: u64,
    pub result: Result<Vec<Category>>,
}

/// Network half of the startup sequence: category ids, then clue sets.
pub fn run_startup<A, R>(
    api: &A,
    rng: &mut R,
    settings: &FetchSettings,
    cancel: &CancelToken,
) -> Result<Vec<Category>>
where
    A: TriviaApi + ?Sized,
    R: Rng + ?Sized,
{
    let ids = fetch::fetch_category_ids(api, rng, settings, cancel)?;
    let categories = fetch::fetch_clue_sets(api, rng, &ids, settings, cancel)?;
    cancel.check()?;
    Ok(categories)
}

/// Drives startups: owns the service handle and the channel loader threads
/// report back on.
pub struct GameController {
    api: Arc<dyn TriviaApi + Send + Sync>,
    settings: FetchSettings,
    seed: Option<u64>,
    tx: mpsc::Sender<LoadEvent>,
    rx: mpsc::Receiver<LoadEvent>,
}

impl GameController {
    pub fn new(
        api: Arc<dyn TriviaApi + Send + Sync>,
        settings: FetchSettings,
        seed: Option<u64>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            api,
            settings,
            seed,
            tx,
            rx,
        }
    }

    /// Start (or restart) a game: unmount the old board, show the loading
    /// indicator and fetch a new board in the background.
    pub fn start(&self, state: &mut AppState) {
        let (generation, cancel) = state.begin_startup();

        let api = Arc::clone(&self.api);
        let settings = self.settings.clone();
        let tx = self.tx.clone();
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(generation)),
            None => StdRng::from_entropy(),
        };

        thread::spawn(move || {
            info!(generation, "loader started");
            let result = run_startup(api.as_ref(), &mut rng, &settings, &cancel);
            if tx.send(LoadEvent { generation, result }).is_err() {
                debug!(generation, "controller gone, dropping load result");
            }
        });
    }

    /// Apply every finished load without blocking. Returns true if the
    /// screen changed.
    pub fn poll(&self, state: &mut AppState) -> bool {
        let mut changed = false;
        while let Ok(ev) = self.rx.try_recv() {
            changed |= state.finish_startup(ev.generation, ev.result);
        }
        changed
    }

    /// Block until the current startup settles or `timeout` passes.
    pub fn wait(&self, state: &mut AppState, timeout: Duration) -> bool {
        let deadline = std::time::Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(ev) => {
                    if state.finish_startup(ev.generation, ev.result) {
                        return true;
                    }
                }
                Err(_) => return false,
            }
        }
    }

    /// Abandon any in-flight startup.
    pub fn shutdown(&self, state: &mut AppState) {
        if let Some(cancel) = state.cancel.take() {
            cancel.cancel();
        }
    }
}

/// Run one startup on the calling thread and mount the result, without a
/// terminal.
pub fn check_once<A>(api: &A, settings: &FetchSettings, seed: Option<u64>) -> Result<GameSession>
where
    A: TriviaApi + ?Sized,
{
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let categories = run_startup(api, &mut rng, settings, &CancelToken::new())?;
    if categories.len() != settings.categories {
        return Err(GameError::Render(format!(
            "expected {} categories, got {}",
            settings.categories,
            categories.len()
        )));
    }
    GameSession::mount(1, categories, settings.clues_per_category)
}
