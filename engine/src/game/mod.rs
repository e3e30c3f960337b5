mod broadcaster;
mod game_state;
mod session;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use broadcaster::{GameBroadcaster, StateSnapshot};
pub use game_state::SnakeGameState;
pub use session::{GameCommand, GameOverReport, SnakeSession};
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use snake::Snake;
pub use types::{DeathReason, Direction, FieldSize, GameOutcome, Point};
