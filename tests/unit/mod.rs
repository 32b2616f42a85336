mod common;

mod guide_flow;

mod session_flow;
