//! Profile orchestrator
//!
//! Top-level entry point. Dispatches by input shape: anything containing a
//! dot is a name, anything else is an address. Wildcard requests go through
//! the index shortcut before the forward path; narrowed requests skip it.

use crate::address::{parse_address, strip_hex_prefix, AddressCodec};
use crate::error::Result;
use crate::forward::resolve_name;
use crate::index::{concretize_request, IndexQuery};
use crate::reverse::resolve_address;
use crate::transport::ResolverTransport;
use std::sync::Arc;
use tracing::debug;
use types::{ProfileResult, RecordRequest};

/// Resolves names and addresses to normalized profiles.
///
/// All external capabilities are injected; a `ProfileResolver` holds no
/// other state and every call is independent and side-effect-free.
pub struct ProfileResolver {
    transport: Arc<dyn ResolverTransport>,
    index: Arc<dyn IndexQuery>,
    address_codec: Arc<dyn AddressCodec>,
}

impl ProfileResolver {
    pub fn new(
        transport: Arc<dyn ResolverTransport>,
        index: Arc<dyn IndexQuery>,
        address_codec: Arc<dyn AddressCodec>,
    ) -> Self {
        Self {
            transport,
            index,
            address_codec,
        }
    }

    /// Resolve a name or an address to its profile.
    ///
    /// `options == None` requests everything the resolver has set. A result
    /// with `records == None` is unverifiable, not an error.
    pub async fn get_profile(
        &self,
        input: &str,
        options: Option<RecordRequest>,
    ) -> Result<ProfileResult> {
        let request = options.unwrap_or_default();
        if input.contains('.') {
            self.name_profile(input, request).await
        } else {
            self.address_profile(input, request).await
        }
    }

    async fn name_profile(&self, name: &str, mut request: RecordRequest) -> Result<ProfileResult> {
        if request.is_wildcard() {
            concretize_request(&*self.index, name, &mut request).await?;
        }
        resolve_name(&*self.transport, &*self.address_codec, name, &request).await
    }

    async fn address_profile(
        &self,
        address: &str,
        mut request: RecordRequest,
    ) -> Result<ProfileResult> {
        let queried = parse_address(address)?;

        let Some(name) = self.transport.primary_name(queried).await? else {
            debug!(address, "no name bound to address");
            return Ok(ProfileResult::unverified(None, Some(address.to_string())));
        };

        if request.is_wildcard() {
            // Shortcut path: concretize against the bound name, resolve it
            // forward, then verify the round trip ourselves.
            concretize_request(&*self.index, &name, &mut request).await?;
            let profile =
                resolve_name(&*self.transport, &*self.address_codec, &name, &request).await?;

            let verified = profile
                .address
                .as_deref()
                .map(|resolved| same_address(resolved, address))
                .unwrap_or(false);
            if !verified {
                debug!(address, name = %name, "forward resolution of bound name mismatched");
                return Ok(ProfileResult::unverified(
                    Some(name),
                    Some(address.to_string()),
                ));
            }

            Ok(ProfileResult {
                name: Some(name),
                address: profile.address,
                records: profile.records,
                reverse_match: Some(true),
            })
        } else {
            resolve_address(&*self.transport, &*self.address_codec, address, &request).await
        }
    }
}

fn same_address(a: &str, b: &str) -> bool {
    strip_hex_prefix(a).eq_ignore_ascii_case(strip_hex_prefix(b))
}
