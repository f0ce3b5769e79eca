//! Typed REST surface over the Studylance backend. One `ApiClient` carries
//! every endpoint group; the `AuthApi`/`PostsApi` traits are the seams the
//! session store depends on.

mod admin;
mod auth;
mod client;
mod complaints;
mod lookup;
pub mod models;
mod posts;
mod profiles;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use posts::PostsApi;
