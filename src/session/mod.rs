pub mod store;

pub use store::{SessionState, SessionStore};
