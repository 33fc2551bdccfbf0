//! Profile resolution for names and wallet addresses
//!
//! Resolves a human-readable name or a wallet address to a normalized set of
//! profile records (primary address, text records, coin-type addresses,
//! content hash) from a naming registry. Two strategies are combined:
//!
//! - an authoritative on-chain path batching every record lookup into one
//!   `multicall` round trip, and
//! - an opportunistic off-chain index query that discovers *which* record
//!   keys exist for a name, so a "give me everything" request can be
//!   concretized before the on-chain batch is built.
//!
//! ## Resolution Flow
//!
//! ```text
//! ProfileResolver → (index shortcut | forward/reverse resolver)
//!       → codec::build_record_calls → codec::encode_batch
//!       → [ResolverTransport] → codec::decode_batch
//!       → format::format_records → ProfileResult
//! ```
//!
//! External capabilities (contract caller, index query, address codec) are
//! injected as trait objects, never reached through ambient state. All calls
//! within one resolution run sequentially; there is no shared mutable state
//! across resolutions, and no retry is ever attempted here.
//!
//! ## What This Crate Does NOT Contain
//! - Transaction submission or record mutation
//! - Caching of resolved profiles
//! - Retry/backoff policy (a transport failure ends the resolution)

pub mod address;
pub mod error;
pub mod format;
pub mod forward;
pub mod index;
pub mod profile;
pub mod reverse;
pub mod transport;

pub use address::{parse_address, AddressCodec, EvmAddressCodec};
pub use error::{AddressCodecError, ResolveError, TransportError};
pub use format::{extract_primary_address, format_records};
pub use forward::resolve_name;
pub use index::{concretize_request, IndexQuery, IndexRecords};
pub use profile::ProfileResolver;
pub use reverse::resolve_address;
pub use transport::{ResolverTransport, ReverseOutcome};
