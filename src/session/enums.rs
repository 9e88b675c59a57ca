pub mod direction;
pub mod dispatch;
