//! State Management
//!
//! Session and global application state.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use session::{provide_session, use_session, Session, UserProfile};
