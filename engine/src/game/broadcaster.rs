use std::future::Future;

use super::types::{FieldSize, Point};

/// Per-tick read-only view handed to the presentation side.
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    pub snake: Vec<Point>,
    pub food: Point,
    pub field_size: FieldSize,
    pub score: u32,
}

pub trait GameBroadcaster {
    fn broadcast_state(&self, snapshot: StateSnapshot) -> impl Future<Output = ()> + Send;
}
