//! Ledger primitives and cbor codec for the Babbage era

mod model;

pub mod address;
pub mod crypto;

pub use model::*;
