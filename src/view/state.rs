// src/view/state.rs

use crate::api::FetchError;
use crate::domain::Listing;
use tracing::{debug, error};

/// What the grid shows right now.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// A fetch is in flight; the grid renders skeletons.
    Loading,
    /// The last fetch succeeded; `items` is its result.
    Ready,
    /// The last fetch failed; `items` still holds the previous result.
    Failed(String),
}

/// Identifies one issued fetch. Only the most recent token may settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    Stale,
}

/// UI state of one storefront view.
///
/// Mutated only through the transition methods below. The list is never
/// edited in place: every applied fetch swaps in a fresh `Vec`.
#[derive(Debug)]
pub struct ViewState {
    query: String,
    property_type: String,
    items: Vec<Listing>,
    phase: Phase,
    latest: u64,
    // false until the first fetch of this mount is issued
    started: bool,
}

/// Owned copy of a view, handed to the templates once the lock is released.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub query: String,
    pub property_type: String,
    pub items: Vec<Listing>,
    pub phase: Phase,
}

impl ViewSnapshot {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// A freshly mounted view: loading, nothing to show yet.
    pub fn new() -> Self {
        Self {
            query: String::new(),
            property_type: String::new(),
            items: Vec::new(),
            phase: Phase::Loading,
            latest: 0,
            started: false,
        }
    }

    /// Whether this mount has issued any fetch yet.
    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_property_type(&mut self, property_type: impl Into<String>) {
        self.property_type = property_type.into();
    }

    /// Drop everything and start over, as a page reload does.
    ///
    /// Fetches issued before the reset can never settle into the new view.
    pub fn reset(&mut self) {
        let latest = self.latest;
        *self = Self::new();
        self.latest = latest + 1;
    }

    /// Enter `Loading` and issue the token the fetch must settle with.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.latest += 1;
        self.started = true;
        self.phase = Phase::Loading;
        FetchToken(self.latest)
    }

    pub fn settle(
        &mut self,
        token: FetchToken,
        outcome: Result<Vec<Listing>, FetchError>,
    ) -> Settled {
        if token.0 != self.latest {
            debug!(
                token = token.0,
                latest = self.latest,
                "ignoring result of superseded fetch"
            );
            return Settled::Stale;
        }

        match outcome {
            Ok(items) => {
                self.items = items;
                self.phase = Phase::Ready;
            }
            Err(e) => {
                error!(error = %e, "listing fetch failed");
                self.phase = Phase::Failed(e.to_string());
            }
        }

        Settled::Applied
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            query: self.query.clone(),
            property_type: self.property_type.clone(),
            items: self.items.clone(),
            phase: self.phase.clone(),
        }
    }
}

#[cfg(test)]
impl ViewState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn property_type(&self) -> &str {
        &self.property_type
    }

    pub fn items(&self) -> &[Listing] {
        &self.items
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}
