use std::collections::VecDeque;

use super::types::{Direction, FieldSize, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    /// Lays the snake out horizontally from the field center, trailing left,
    /// facing right. `initial_length` must fit left of the center; the
    /// settings validation guarantees that.
    pub fn new(field_size: &FieldSize, initial_length: usize) -> Self {
        let center = Point::new(field_size.width / 2, field_size.height / 2);

        let mut body = VecDeque::with_capacity(initial_length);
        for i in 0..initial_length {
            body.push_back(Point::new(center.x - i, center.y));
        }

        Self {
            body,
            direction: Direction::Right,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.iter().any(|&segment| segment == point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_is_centered_and_trails_left() {
        let field_size = FieldSize {
            width: 10,
            height: 10,
        };
        let snake = Snake::new(&field_size, 5);

        let expected = [
            Point::new(5, 5),
            Point::new(4, 5),
            Point::new(3, 5),
            Point::new(2, 5),
            Point::new(1, 5),
        ];
        assert_eq!(snake.body.len(), 5);
        for (segment, expected) in snake.body.iter().zip(expected.iter()) {
            assert_eq!(segment, expected);
        }
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_head_and_tail() {
        let field_size = FieldSize {
            width: 12,
            height: 8,
        };
        let snake = Snake::new(&field_size, 3);

        assert_eq!(snake.head(), Point::new(6, 4));
        assert_eq!(snake.tail(), Point::new(4, 4));
    }

    #[test]
    fn test_occupies() {
        let field_size = FieldSize {
            width: 10,
            height: 10,
        };
        let snake = Snake::new(&field_size, 2);

        assert!(snake.occupies(Point::new(5, 5)));
        assert!(snake.occupies(Point::new(4, 5)));
        assert!(!snake.occupies(Point::new(6, 5)));
    }
}
