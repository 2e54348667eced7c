//! Game events (messages).

use bevy::prelude::*;

use super::Position;

/// Message triggered when food is eaten (for score and visual effects).
#[derive(Message)]
pub struct FoodEatenEvent {
    pub position: Position,
}
