use std::cell::RefCell;

use url::Url;

use crate::{LocationState, NavigationError};

/// The platform a [`Navigator`](crate::Navigator) runs on.
///
/// A host exposes the live document URL, the session history and a page-wide event channel. The
/// navigator never mutates the URL any other way than through [`NavigationHost::push_entry`], but
/// the host is free to report a URL changed by someone else; the navigator reconciles with it on
/// the next poll.
pub trait NavigationHost {
    /// The URL the document currently shows.
    fn current_url(&self) -> Result<Url, NavigationError>;

    /// Push a new history entry carrying `state`, titled `title`, showing `url`.
    fn push_entry(&self, state: &LocationState, title: &str, url: &str)
        -> Result<(), NavigationError>;

    /// Announce an accepted navigation to everyone listening for `event`.
    fn broadcast(&self, event: &str, state: &LocationState) -> Result<(), NavigationError>;
}

/// A history entry recorded by a [`MemoryHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The resolved URL of the entry.
    pub url: Url,
    /// The state attached to the entry, absent for entries the navigator did not create.
    pub state: Option<LocationState>,
    /// The title the entry was pushed with.
    pub title: String,
}

/// A broadcast recorded by a [`MemoryHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Broadcast {
    /// The event name.
    pub event: String,
    /// The event payload.
    pub state: LocationState,
}

struct MemoryHostState {
    entries: Vec<HistoryEntry>,
    index: usize,
    broadcasts: Vec<Broadcast>,
}

/// A [`NavigationHost`] that keeps the URL, the history stack and every broadcast in memory.
///
/// Besides driving the navigator in tests it can back renderers without a browser. The helpers
/// [`MemoryHost::back`], [`MemoryHost::forward`] and [`MemoryHost::replace_url`] simulate what a
/// user or foreign script would do to a real page.
pub struct MemoryHost {
    state: RefCell<MemoryHostState>,
}

impl MemoryHost {
    /// Create a host whose single history entry shows `url` and carries no state.
    pub fn new(url: Url) -> Self {
        Self {
            state: RefCell::new(MemoryHostState {
                entries: vec![HistoryEntry {
                    url,
                    state: None,
                    title: String::new(),
                }],
                index: 0,
                broadcasts: Vec::new(),
            }),
        }
    }

    /// Every history entry, oldest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.state.borrow().entries.clone()
    }

    /// Every broadcast made so far, oldest first.
    pub fn broadcasts(&self) -> Vec<Broadcast> {
        self.state.borrow().broadcasts.clone()
    }

    /// Step back one entry, returning the state attached to the entry now shown.
    ///
    /// Returns `None` when already at the first entry. The returned value is what a native
    /// back-navigation event would carry.
    pub fn back(&self) -> Option<Option<LocationState>> {
        let mut state = self.state.borrow_mut();
        if state.index == 0 {
            return None;
        }
        state.index -= 1;
        Some(state.entries[state.index].state.clone())
    }

    /// Step forward one entry, returning the state attached to the entry now shown.
    pub fn forward(&self) -> Option<Option<LocationState>> {
        let mut state = self.state.borrow_mut();
        if state.index + 1 >= state.entries.len() {
            return None;
        }
        state.index += 1;
        Some(state.entries[state.index].state.clone())
    }

    /// Rewrite the URL of the current entry without telling anyone, like a foreign
    /// `history.replaceState` call would.
    pub fn replace_url(&self, href: &str) -> Result<(), NavigationError> {
        let mut state = self.state.borrow_mut();
        let index = state.index;
        let url = state.entries[index].url.join(href)?;
        state.entries[index] = HistoryEntry {
            url,
            state: None,
            title: String::new(),
        };
        Ok(())
    }
}

impl NavigationHost for MemoryHost {
    fn current_url(&self) -> Result<Url, NavigationError> {
        let state = self.state.borrow();
        Ok(state.entries[state.index].url.clone())
    }

    fn push_entry(
        &self,
        location: &LocationState,
        title: &str,
        url: &str,
    ) -> Result<(), NavigationError> {
        let mut state = self.state.borrow_mut();
        let url = state.entries[state.index].url.join(url)?;

        // pushing drops the forward stack
        let keep = state.index + 1;
        state.entries.truncate(keep);
        state.entries.push(HistoryEntry {
            url,
            state: Some(location.clone()),
            title: title.to_string(),
        });
        state.index = keep;
        Ok(())
    }

    fn broadcast(&self, event: &str, location: &LocationState) -> Result<(), NavigationError> {
        self.state.borrow_mut().broadcasts.push(Broadcast {
            event: event.to_string(),
            state: location.clone(),
        });
        Ok(())
    }
}
