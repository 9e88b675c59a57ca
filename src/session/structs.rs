pub mod idle_run;
pub mod pending_request;
pub mod session_inner;
pub mod session_state;
