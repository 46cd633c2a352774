//! Ledger primitives and cbor codec for the Conway era

mod model;

pub mod crypto;
pub mod script_data;

pub use model::*;
pub use script_data::{LanguageViews, PlutusVersion, ScriptData};
