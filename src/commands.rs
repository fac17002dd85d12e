//! Commands for the `jwk-keygen` tool.

mod generate;

pub use self::generate::*;
