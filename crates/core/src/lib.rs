pub mod client;
pub mod contracts;
pub mod derivation;
pub mod error;
pub mod types;

pub use client::*;
pub use contracts::*;
pub use derivation::*;
pub use error::*;
pub use types::*;
