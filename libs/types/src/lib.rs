//! Unified type system for name-profile resolution
//!
//! This crate is the "Pure Data" layer of the resolver stack: value objects
//! exchanged between the call builder, the batch codec, the record formatter
//! and the orchestrator. Everything here is constructed and consumed within a
//! single resolution call; there is no persistent state and no I/O.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → libs/resolver
//!     ↑            ↓             ↓
//! Pure Data   Encoding Rules  Resolution Flow
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - ABI encoding/decoding logic (belongs in libs/codec)
//! - Transport or capability traits (belong in libs/resolver)

pub mod coins;
pub mod profile;
pub mod records;
pub mod request;

pub use coins::{coin_label, coin_name, ETH_COIN_TYPE};
pub use profile::{ProfileRecords, ProfileResult};
pub use records::{CallDescriptor, RecordKind, ResolvedRecord};
pub use request::{ContentHashRequest, KeySelection, RecordRequest};
