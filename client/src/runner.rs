use tokio::sync::mpsc;

use engine::game::{
    GameBroadcaster, GameCommand, GameOutcome, GameSettings, SessionRng, SnakeGameState,
    SnakeSession, StateSnapshot,
};
use engine::log;

use crate::state::{AppState, SharedState};

pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: StateSnapshot) {
        self.shared_state.publish_snapshot(snapshot);
    }
}

/// Runs one play session to completion and routes the result to the next
/// screen: collisions get a game-over screen, a user quit goes straight back
/// to the menu.
pub async fn run_snake_game(
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<GameCommand>,
    settings: GameSettings,
) {
    let seed: u64 = rand::random();
    let mut rng = SessionRng::new(seed);
    log!(
        "Starting {}x{} snake session with seed {}",
        settings.field_size.width,
        settings.field_size.height,
        seed
    );

    let game_state = SnakeGameState::new(&settings, &mut rng);
    let broadcaster = LocalBroadcaster::new(shared_state.clone());

    let report = SnakeSession::run(&settings, game_state, rng, command_rx, broadcaster).await;

    match report.outcome {
        GameOutcome::UserQuit => shared_state.set_state(AppState::Menu),
        outcome => shared_state.set_state(AppState::GameOver {
            outcome,
            score: report.score,
        }),
    }
}
