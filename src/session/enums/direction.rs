#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    ClientToBackend,
    BackendToClient,
}
