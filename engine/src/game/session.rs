use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::interval;

use crate::log;
use super::broadcaster::GameBroadcaster;
use super::game_state::SnakeGameState;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::types::{Direction, GameOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Turn(Direction),
    Quit,
}

#[derive(Clone, Debug)]
pub struct GameOverReport {
    pub outcome: GameOutcome,
    pub score: u32,
    pub final_length: usize,
}

pub struct SnakeSession;

impl SnakeSession {
    pub async fn run(
        settings: &GameSettings,
        mut game_state: SnakeGameState,
        mut rng: SessionRng,
        mut command_rx: mpsc::UnboundedReceiver<GameCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> GameOverReport {
        let mut tick_interval_timer = interval(settings.tick_interval);

        loop {
            tick_interval_timer.tick().await;

            // A quit observed here takes effect before this tick's step.
            loop {
                match command_rx.try_recv() {
                    Ok(GameCommand::Turn(direction)) => game_state.set_direction(direction),
                    Ok(GameCommand::Quit) => {
                        return Self::report(GameOutcome::UserQuit, &game_state);
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        return Self::report(GameOutcome::UserQuit, &game_state);
                    }
                }
            }

            if let Err(reason) = game_state.step(&mut rng) {
                return Self::report(reason.into(), &game_state);
            }

            broadcaster.broadcast_state(game_state.snapshot()).await;
        }
    }

    fn report(outcome: GameOutcome, game_state: &SnakeGameState) -> GameOverReport {
        log!(
            "Session over: {:?}. Score: {}, length: {}",
            outcome,
            game_state.score,
            game_state.snake.len()
        );
        GameOverReport {
            outcome,
            score: game_state.score,
            final_length: game_state.snake.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::game::{FieldSize, Point, StateSnapshot};

    struct NullBroadcaster;

    impl GameBroadcaster for NullBroadcaster {
        async fn broadcast_state(&self, _snapshot: StateSnapshot) {}
    }

    #[derive(Clone)]
    struct CaptureBroadcaster {
        snapshots: Arc<Mutex<Vec<StateSnapshot>>>,
    }

    impl GameBroadcaster for CaptureBroadcaster {
        async fn broadcast_state(&self, snapshot: StateSnapshot) {
            self.snapshots.lock().unwrap().push(snapshot);
        }
    }

    fn test_settings(width: usize, height: usize, initial_length: usize) -> GameSettings {
        GameSettings {
            field_size: FieldSize { width, height },
            initial_length,
            max_length: 100,
            tick_interval: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_quit_ends_session_before_any_step() {
        let settings = test_settings(10, 10, 5);
        let mut rng = SessionRng::new(42);
        let game_state = SnakeGameState::new(&settings, &mut rng);

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        command_tx.send(GameCommand::Quit).unwrap();

        let report =
            SnakeSession::run(&settings, game_state, rng, command_rx, NullBroadcaster).await;

        assert_eq!(report.outcome, GameOutcome::UserQuit);
        assert_eq!(report.score, 0);
        assert_eq!(report.final_length, 5);
    }

    #[tokio::test]
    async fn test_session_ends_with_wall_collision() {
        let settings = test_settings(10, 10, 2);
        let mut rng = SessionRng::new(42);
        let game_state = SnakeGameState::new(&settings, &mut rng);

        let (_command_tx, command_rx) = mpsc::unbounded_channel();

        let report =
            SnakeSession::run(&settings, game_state, rng, command_rx, NullBroadcaster).await;

        assert_eq!(report.outcome, GameOutcome::WallCollision);
        assert_eq!(report.final_length, 2);
    }

    #[tokio::test]
    async fn test_turn_commands_reach_the_game_state() {
        let settings = test_settings(10, 10, 2);
        let mut rng = SessionRng::new(42);
        let game_state = SnakeGameState::new(&settings, &mut rng);

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        command_tx.send(GameCommand::Turn(Direction::Up)).unwrap();

        let broadcaster = CaptureBroadcaster {
            snapshots: Arc::new(Mutex::new(Vec::new())),
        };
        let snapshots = broadcaster.snapshots.clone();

        let report = SnakeSession::run(&settings, game_state, rng, command_rx, broadcaster).await;

        // The head starts at (5, 5) and climbs until it leaves the field.
        assert_eq!(report.outcome, GameOutcome::WallCollision);
        let snapshots = snapshots.lock().unwrap();
        assert!(!snapshots.is_empty());
        assert_eq!(snapshots[0].snake[0], Point::new(5, 4));
        assert_eq!(snapshots.len(), 5);
    }

    #[tokio::test]
    async fn test_closed_command_channel_counts_as_quit() {
        let settings = test_settings(10, 10, 5);
        let mut rng = SessionRng::new(42);
        let game_state = SnakeGameState::new(&settings, &mut rng);

        let (command_tx, command_rx) = mpsc::unbounded_channel::<GameCommand>();
        drop(command_tx);

        let report =
            SnakeSession::run(&settings, game_state, rng, command_rx, NullBroadcaster).await;

        assert_eq!(report.outcome, GameOutcome::UserQuit);
        assert_eq!(report.final_length, 5);
    }
}
