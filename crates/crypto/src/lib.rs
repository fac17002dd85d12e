//! ES256 signing keys and their JSON Web Key representation.

pub mod jwk;
pub mod signing;

pub use jwk::{EcJwk, JwkError};
