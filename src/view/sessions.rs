// src/view/sessions.rs
use crate::view::ViewState;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

pub const SESSION_COOKIE: &str = "stayfront_sid";

const TOKEN_BYTES: usize = 32;

type TokenHash = [u8; 32];

struct Entry {
    view: Arc<Mutex<ViewState>>,
    last_seen: u64,
}

#[derive(Default)]
struct Entries {
    by_token: HashMap<TokenHash, Entry>,
    // bumped on every open; orders entries by recency
    clock: u64,
}

/// In-memory views keyed by visitor cookie.
///
/// Only the SHA-256 of a cookie token is kept. When the store is full the
/// view that was used least recently is dropped.
pub struct SessionStore {
    entries: Mutex<Entries>,
    capacity: usize,
}

/// A visitor's view, plus the raw token to hand back in `Set-Cookie` when new.
pub struct Session {
    pub token: String,
    pub is_new: bool,
    view: Arc<Mutex<ViewState>>,
}

impl Session {
    /// A one-off view that is never stored and never handed out as a cookie.
    pub fn detached() -> Self {
        Self {
            token: String::new(),
            is_new: false,
            view: Arc::new(Mutex::new(ViewState::new())),
        }
    }

    pub fn view(&self) -> MutexGuard<'_, ViewState> {
        lock(&self.view)
    }

    pub fn set_cookie(&self) -> String {
        format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.token)
    }
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(Entries::default()),
            capacity: capacity.max(1),
        }
    }

    /// The stored view behind `token`, if there is one.
    pub fn find(&self, token: &str) -> Option<Session> {
        let mut guard = lock(&self.entries);
        touch(&mut guard, token)
    }

    /// Look up the view behind `token`, or start a new one.
    pub fn open(&self, token: Option<&str>) -> Session {
        let mut guard = lock(&self.entries);
        if let Some(session) = token.and_then(|t| touch(&mut guard, t)) {
            return session;
        }

        let entries = &mut *guard;
        entries.clock += 1;
        let now = entries.clock;

        if entries.by_token.len() >= self.capacity {
            let oldest = entries
                .by_token
                .iter()
                .min_by_key(|(_, e)| e.last_seen)
                .map(|(k, _)| *k);
            if let Some(key) = oldest {
                entries.by_token.remove(&key);
                debug!("session store full, evicted least recently used view");
            }
        }

        let token = generate_token(&mut OsRng);
        let view = Arc::new(Mutex::new(ViewState::new()));
        entries.by_token.insert(
            hash_token(&token),
            Entry {
                view: Arc::clone(&view),
                last_seen: now,
            },
        );

        Session {
            token,
            is_new: true,
            view,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        lock(&self.entries).by_token.len()
    }
}

fn touch(entries: &mut Entries, token: &str) -> Option<Session> {
    entries.clock += 1;
    let now = entries.clock;

    let entry = entries.by_token.get_mut(&hash_token(token))?;
    entry.last_seen = now;
    Some(Session {
        token: token.to_string(),
        is_new: false,
        view: Arc::clone(&entry.view),
    })
}

/// Pull our session token out of a `Cookie` request header.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// URL-safe base64 of random bytes, no padding.
fn generate_token<R: RngCore>(rng: &mut R) -> String {
    let mut buf = [0u8; TOKEN_BYTES];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

fn hash_token(token: &str) -> TokenHash {
    let digest = Sha256::digest(token.as_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

// A panic while holding a view leaves plain data behind; keep serving it.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
