use crate::log;
use super::broadcaster::StateSnapshot;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, FieldSize, Point};

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub snake: Snake,
    pub food: Point,
    pub field_size: FieldSize,
    pub max_length: usize,
    pub score: u32,
}

impl SnakeGameState {
    pub fn new(settings: &GameSettings, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(&settings.field_size, settings.initial_length);
        let food = spawn_food(&settings.field_size, rng);

        Self {
            snake,
            food,
            field_size: settings.field_size.clone(),
            max_length: settings.max_length,
            score: 0,
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.snake.direction) {
            self.snake.pending_direction = Some(direction);
        }
    }

    /// Advances the simulation by one tick. Wall collision is checked before
    /// self collision, and both before the food check.
    pub fn step(&mut self, rng: &mut SessionRng) -> Result<(), DeathReason> {
        if let Some(direction) = self.snake.pending_direction.take() {
            self.snake.direction = direction;
        }

        let next_head = self.next_head_position()?;

        // The tail cell is exempt: it vacates during this same tick.
        if self.snake.occupies(next_head) && next_head != self.snake.tail() {
            return Err(DeathReason::SelfCollision);
        }

        self.snake.body.push_front(next_head);

        if next_head == self.food {
            self.score += 1;
            if self.snake.body.len() > self.max_length {
                self.snake.body.pop_back();
            }
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.food = spawn_food(&self.field_size, rng);
        } else {
            self.snake.body.pop_back();
        }

        Ok(())
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            snake: self.snake.body.iter().copied().collect(),
            food: self.food,
            field_size: self.field_size.clone(),
            score: self.score,
        }
    }

    fn next_head_position(&self) -> Result<Point, DeathReason> {
        let head = self.snake.head();

        let next_head = match self.snake.direction {
            Direction::Up => {
                if head.y == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x, head.y - 1)
            }
            Direction::Down => {
                if head.y >= self.field_size.height - 1 {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x, head.y + 1)
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x - 1, head.y)
            }
            Direction::Right => {
                if head.x >= self.field_size.width - 1 {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x + 1, head.y)
            }
        };

        Ok(next_head)
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = food;
    }
}

fn spawn_food(field_size: &FieldSize, rng: &mut SessionRng) -> Point {
    let food = Point::new(
        rng.random_range(0..field_size.width),
        rng.random_range(0..field_size.height),
    );
    log!("Food spawned at ({}, {})", food.x, food.y);
    food
}
