use std::sync::{Arc, Mutex};

use eframe::egui;
use engine::game::{GameOutcome, StateSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTarget {
    Snake,
    Food,
}

#[derive(Clone, Debug)]
pub enum AppState {
    Menu,
    Settings,
    ChoosingColor { target: ColorTarget },
    HowToPlay,
    InGame { snapshot: Option<StateSnapshot> },
    GameOver { outcome: GameOutcome, score: u32 },
}

pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    error: Arc<Mutex<Option<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Menu)),
            error: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().unwrap() = state;
        self.request_repaint();
    }

    pub fn get_state(&self) -> AppState {
        self.state.lock().unwrap().clone()
    }

    /// Updates the in-game view for the current tick. Ignored when the UI has
    /// already navigated away from the game screen.
    pub fn publish_snapshot(&self, snapshot: StateSnapshot) {
        {
            let mut state = self.state.lock().unwrap();
            if let AppState::InGame { snapshot: slot } = &mut *state {
                *slot = Some(snapshot);
            }
        }
        self.request_repaint();
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap() = Some(error);
        self.request_repaint();
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }

    pub fn clear_error(&self) {
        *self.error.lock().unwrap() = None;
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    pub fn set_context(&self, context: egui::Context) {
        *self.context.lock().unwrap() = Some(context);
    }

    fn request_repaint(&self) {
        if let Some(context) = self.context.lock().unwrap().as_ref() {
            context.request_repaint();
        }
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            error: Arc::clone(&self.error),
            context: Arc::clone(&self.context),
        }
    }
}
