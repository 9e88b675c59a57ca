use std::fmt;
use std::fmt::Formatter;
use crate::session::enums::direction::Direction;

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::ClientToBackend => Direction::BackendToClient,
            Direction::BackendToClient => Direction::ClientToBackend,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Direction::ClientToBackend => write!(f, "client->backend"),
            Direction::BackendToClient => write!(f, "backend->client"),
        }
    }
}
