// src/view/storefront.rs
use crate::api::ListingApi;
use crate::view::sessions::Session;
use crate::view::{SessionStore, ViewSnapshot};
use tracing::info;

/// Drives each visitor's view through fetches against the listing service.
///
/// The view lock is taken to issue a token and again to settle; it is never
/// held while the request is on the wire.
pub struct Storefront<A: ListingApi> {
    api: A,
    sessions: SessionStore,
    scene_url: String,
}

impl<A: ListingApi> Storefront<A> {
    pub fn new(api: A, sessions: SessionStore, scene_url: impl Into<String>) -> Self {
        Self {
            api,
            sessions,
            scene_url: scene_url.into(),
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn scene_url(&self) -> &str {
        &self.scene_url
    }

    /// Page load: forget the old view and fetch the featured list once.
    pub fn mount(&self, session: &Session) -> ViewSnapshot {
        session.view().reset();
        info!(new_visitor = session.is_new, "mounting storefront view");
        self.refresh(session)
    }

    pub fn refresh(&self, session: &Session) -> ViewSnapshot {
        let token = session.view().begin_fetch();

        let outcome = self.api.fetch_featured();

        let mut view = session.view();
        view.settle(token, outcome);
        view.snapshot()
    }

    /// Record the filters and replace the list with the matching listings.
    pub fn search(&self, session: &Session, query: &str, property_type: &str) -> ViewSnapshot {
        let token = {
            let mut view = session.view();
            view.set_query(query);
            view.set_property_type(property_type);
            view.begin_fetch()
        };

        let outcome = self.api.search(Some(query), Some(property_type));

        let mut view = session.view();
        view.settle(token, outcome);
        view.snapshot()
    }

    /// What the view shows now. A view that never fetched gets its featured
    /// fetch here, so a grid polling for it always settles.
    pub fn current(&self, session: &Session) -> ViewSnapshot {
        let started = session.view().has_started();
        if !started {
            return self.refresh(session);
        }
        session.view().snapshot()
    }
}
