//! Request tokens.
//!
//! Every request a controller issues gets a token from a monotonically
//! increasing counter. A response is stale when a newer token has since been
//! issued for the same [`Slot`]; stale responses are dropped so an older,
//! slower request can never overwrite what a newer one displayed.

use std::collections::HashMap;

/// The piece of controller state a request will write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Health,
    DemoData,
    Analysis,
    Comparison,
    Weights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub slot: Slot,
    pub seq: u64,
}

#[derive(Debug, Clone)]
pub struct RequestSequencer {
    next_seq: u64,
    latest: HashMap<Slot, u64>,
    /// Per slot, tokens below this sequence number are never accepted
    retired_below: HashMap<Slot, u64>,
    discard_stale: bool,
}

impl Default for RequestSequencer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RequestSequencer {
    /// With `discard_stale` off every response is accepted and the last one to
    /// resolve wins.
    pub fn new(discard_stale: bool) -> Self {
        Self {
            next_seq: 1,
            latest: HashMap::new(),
            retired_below: HashMap::new(),
            discard_stale,
        }
    }

    pub fn issue(&mut self, slot: Slot) -> RequestToken {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest.insert(slot, seq);
        RequestToken { slot, seq }
    }

    /// True if no newer token has been issued for the token's slot.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get(&token.slot) == Some(&token.seq)
    }

    /// Retire every token issued so far for `slot`, in either mode.
    pub fn invalidate(&mut self, slot: Slot) {
        self.retired_below.insert(slot, self.next_seq);
        self.latest.remove(&slot);
    }

    /// Decide whether a response carrying `token` may update state.
    pub fn accept(&self, token: RequestToken) -> bool {
        let retired = self
            .retired_below
            .get(&token.slot)
            .is_some_and(|&floor| token.seq < floor);
        !retired && (!self.discard_stale || self.is_current(token))
    }
}
