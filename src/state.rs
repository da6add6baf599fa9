use tracing::{debug, error, info};

use crate::error::GameError;
use crate::fetch::CancelToken;
use crate::model::{Category, CellId};
use crate::reveal::{ClickTarget, RevealOutcome};
use crate::session::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Loading,
    Playing,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ConfirmQuit,
    Help,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub session: Option<GameSession>,
    /// Bumped on every startup; results from older startups are dropped.
    pub generation: u64,
    pub cancel: Option<CancelToken>,
    pub category_count: usize,
    pub clue_count: usize,
    pub cursor: CellId,
    pub dialog_stack: Vec<Dialog>,
    pub spinner_frame: usize,
    /// Logged cause of the last failure. Never drawn.
    pub last_error: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(category_count: usize, clue_count: usize) -> Self {
        Self {
            screen: Screen::Start,
            session: None,
            generation: 0,
            cancel: None,
            category_count,
            clue_count,
            cursor: CellId::new(0, 0),
            dialog_stack: Vec::new(),
            spinner_frame: 0,
            last_error: None,
            should_quit: false,
        }
    }

    /// Tear down whatever is mounted, cancel any in-flight startup and show
    /// the loading indicator. Returns the generation and token the new
    /// startup must carry.
    pub fn begin_startup(&mut self) -> (u64, CancelToken) {
        if let Some(previous) = self.cancel.take() {
            previous.cancel();
        }
        if let Some(old) = self.session.take() {
            debug!(game = old.number, "board unmounted");
        }

        self.generation += 1;
        let token = CancelToken::new();
        self.cancel = Some(token.clone());
        self.screen = Screen::Loading;
        self.cursor = CellId::new(0, 0);
        self.last_error = None;
        self.spinner_frame = 0;

        info!(generation = self.generation, "startup begun");
        (self.generation, token)
    }

    /// Mount the fetched categories, or fail the startup. Returns `false`
    /// when the result belongs to an abandoned startup.
    pub fn finish_startup(
        &mut self,
        generation: u64,
        result: Result<Vec<Category>, GameError>,
    ) -> bool {
        if generation != self.generation || self.screen != Screen::Loading {
            debug!(generation, current = self.generation, "dropping stale startup result");
            return false;
        }
        self.cancel = None;

        let mounted = result.and_then(|categories| {
            GameSession::mount(generation, categories, self.clue_count)
        });

        match mounted {
            Ok(session) => {
                info!(
                    game = session.number,
                    columns = session.board.columns(),
                    rows = session.board.row_count(),
                    "board mounted"
                );
                self.session = Some(session);
                self.screen = Screen::Playing;
            }
            Err(e) if e.is_cancelled() => {
                debug!(generation, "startup cancelled");
                return false;
            }
            Err(e) => self.fail(e),
        }
        true
    }

    pub fn fail(&mut self, e: GameError) {
        error!(error = %e, generation = self.generation, "startup failed");
        self.session = None;
        self.cancel = None;
        self.last_error = Some(e.to_string());
        self.screen = Screen::Failed;
    }

    /// Route a click on the mounted board to the reveal state machine.
    pub fn click(&mut self, target: ClickTarget) -> RevealOutcome {
        if self.screen != Screen::Playing {
            return RevealOutcome::Ignored;
        }
        let Some(session) = self.session.as_mut() else {
            return RevealOutcome::Ignored;
        };
        if let ClickTarget::Cell(id) = target {
            if session.cells.contains(id) {
                self.cursor = id;
            }
        }
        session.click(target)
    }

    pub fn click_cursor(&mut self) -> RevealOutcome {
        self.click(ClickTarget::Cell(self.cursor))
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let Some(session) = &self.session else {
            return;
        };
        let cols = session.board.columns() as i32;
        let rows = session.board.row_count() as i32;
        if cols == 0 || rows == 0 {
            return;
        }
        let c = (self.cursor.category as i32 + dx).clamp(0, cols - 1);
        let r = (self.cursor.clue as i32 + dy).clamp(0, rows - 1);
        self.cursor = CellId::new(c as usize, r as usize);
    }

    pub fn tick(&mut self) {
        if self.screen == Screen::Loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
