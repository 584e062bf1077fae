use thiserror::Error;
use crate::grid::Position;
use crate::model::entity::Name;

/// Where a person ended up and why.
#[derive(Debug, Clone, PartialEq)]
pub enum Seat {
    NextToFriend { friend: Name, position: Position },
    Scan(Position),
}

impl Seat {
    pub fn position(&self) -> Position {
        match self {
            Seat::NextToFriend { position, .. } => *position,
            Seat::Scan(position) => *position,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    #[error("position {0} is outside the grid")]
    OutOfBounds(Position),
    #[error("position {0} is already occupied")]
    Occupied(Position),
    #[error("{0} is already seated")]
    AlreadySeated(Name),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlacementError {
    #[error("no seat left for {name}")]
    NoSeat { name: Name },
    #[error(transparent)]
    Grid(#[from] ActionError),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShuffleError {
    #[error("no valid arrangement after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}
