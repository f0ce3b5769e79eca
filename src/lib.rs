//! Studylance client core: bearer-credential claim decoding, the session
//! state machine built around it, and the typed REST client every screen
//! shares. The backend owns all business rules; nothing here is an
//! authorization boundary.

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod session;
pub mod token;
