//! Registration, login, and bearer-token authentication.
//!
//! This crate provides the identity collaborators around the query
//! pipeline: account registration with Argon2 password hashing, login
//! issuing opaque bearer tokens, and token resolution against the
//! sessions table. Tokens are stored only as SHA-256 hashes and expire
//! after a configurable TTL.
//!
//! Login failures are deliberately indistinguishable: an unknown email and
//! a wrong password both produce the same generic error, so the endpoint
//! cannot be used to enumerate registered emails.

mod error;
mod password;
mod service;
mod token;

pub use error::IdentityError;
pub use service::{IdentityService, LoginSession, NewAccount, DEFAULT_TOKEN_TTL_MINUTES};
