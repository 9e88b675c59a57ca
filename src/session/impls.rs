pub mod direction;
pub mod idle_run;
pub mod session_state;
