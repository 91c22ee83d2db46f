// src/resolve.rs
// Wikidata lookup by page title. The detection protocol is a deliberate
// hack: the endpoint answers 302 with the item in Location when the title
// has an entry, and a plain 200 when it does not. Hacky, but it works.

use url::Url;

use crate::net::Transport;

/// Three-way probe outcome. NoEntry ("the title has no item") and
/// Unavailable ("the probe never got an answer") stay distinguishable
/// here; both collapse to an absent id in the persisted output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Found(String),
    NoEntry,
    Unavailable,
}

impl Resolution {
    pub fn into_id(self) -> Option<String> {
        match self {
            Resolution::Found(id) => Some(id),
            Resolution::NoEntry | Resolution::Unavailable => None,
        }
    }
}

pub struct IdentityResolver<'a> {
    transport: &'a dyn Transport,
    lookup_url: &'a str,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(transport: &'a dyn Transport, lookup_url: &'a str) -> Self {
        Self { transport, lookup_url }
    }

    /// Probe the lookup endpoint for `name`. Never fails the caller: a
    /// dead network is just "no identifier today".
    pub fn resolve(&self, name: &str) -> Resolution {
        let Ok(mut url) = Url::parse(self.lookup_url) else {
            return Resolution::Unavailable;
        };
        url.query_pairs_mut().append_pair("page", name);

        match self.transport.get(url.as_str()) {
            Ok(resp) if resp.is_redirect() => match resp.location {
                Some(loc) => Resolution::Found(loc),
                None => Resolution::NoEntry, // redirect with no target; treat as missing
            },
            Ok(_) => Resolution::NoEntry,
            Err(_) => Resolution::Unavailable,
        }
    }
}
