use tracing::{debug, trace};

use crate::{AnchorClick, LocationState, NavigationError, NavigationHost, NavigatorConfig};

/// What the renderer should do with a click after the navigator has seen it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Let the browser handle the click natively.
    Ignored,
    /// The click was turned into an in-page navigation; the default action must be prevented.
    Intercepted,
}

/// The navigation controller.
///
/// Holds the current [`LocationState`] of the page and reconciles it with every source of
/// navigation. All of them end up in [`Navigator::upgrade`]:
///
/// - [`Navigator::handle_click`] for clicks on internal links,
/// - [`Navigator::handle_popstate`] for native back/forward navigation,
/// - [`Navigator::poll`] for URL changes made behind the navigator's back.
///
/// The navigator is driven from a single event loop, so two handlers never interleave and the
/// suppression check in `upgrade` sees a consistent state.
pub struct Navigator<H: NavigationHost> {
    host: H,
    config: NavigatorConfig,
    current: LocationState,
    revision: u64,
}

impl<H: NavigationHost> Navigator<H> {
    /// Create a navigator whose initial state is derived from the host's live URL.
    pub fn new(host: H, config: NavigatorConfig) -> Result<Self, NavigationError> {
        let current = LocationState::from_url(&host.current_url()?);
        debug!(location = %current, "navigator created");
        Ok(Self {
            host,
            config,
            current,
            revision: 0,
        })
    }

    /// The state the wrapped component is currently rendered with.
    pub fn current(&self) -> &LocationState {
        &self.current
    }

    /// The number of navigations accepted since creation.
    ///
    /// Renderers compare revisions around a handler call to decide whether to re-render.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The host this navigator drives.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The configuration this navigator was created with.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Derive a fresh state from the live URL.
    pub fn live_location(&self) -> Result<LocationState, NavigationError> {
        Ok(LocationState::from_url(&self.host.current_url()?))
    }

    /// Reconcile the held state with `candidate`, or with the live URL when there is none.
    ///
    /// Returns `false` without side effects when the candidate serializes to the same URL as the
    /// held state. Otherwise the candidate is broadcast and then replaces the held state.
    pub fn upgrade(&mut self, candidate: Option<LocationState>) -> Result<bool, NavigationError> {
        let candidate = match candidate {
            Some(candidate) => candidate,
            None => self.live_location()?,
        };

        if candidate.same_location(&self.current) {
            trace!(location = %candidate, "location unchanged");
            return Ok(false);
        }

        self.host.broadcast(&self.config.event_name, &candidate)?;
        debug!(from = %self.current, to = %candidate, "location changed");
        self.current = candidate;
        self.revision += 1;
        Ok(true)
    }

    /// Handle a click on the page. `None` means the click did not land inside an `a[href]`.
    ///
    /// Anchors with a `target` attribute and external hrefs are left alone. Internal hrefs are
    /// resolved, pushed onto the history and applied.
    pub fn handle_click(
        &mut self,
        click: Option<AnchorClick>,
    ) -> Result<ClickOutcome, NavigationError> {
        let Some(click) = click else {
            return Ok(ClickOutcome::Ignored);
        };

        if !click.should_intercept() {
            trace!(href = %click.href, target = click.has_target, "click passed through");
            return Ok(ClickOutcome::Ignored);
        }

        self.navigate(&click.href, &click.text)?;
        Ok(ClickOutcome::Intercepted)
    }

    /// Push a history entry for `href` titled `title` and move to it.
    ///
    /// This is the intercepted-click path without the classification step; callers are
    /// responsible for only passing hrefs that stay within the page.
    pub fn navigate(&mut self, href: &str, title: &str) -> Result<bool, NavigationError> {
        let base = self.host.current_url()?;
        let state = LocationState::parse(href, &base)?;
        let url = state.to_string();

        debug!(%href, %url, "pushing history entry");
        self.host.push_entry(&state, title, &url)?;
        self.upgrade(Some(state))
    }

    /// Handle a native back/forward navigation carrying `state`.
    ///
    /// Entries created by other code carry no usable state; the live URL is used instead.
    pub fn handle_popstate(
        &mut self,
        state: Option<LocationState>,
    ) -> Result<bool, NavigationError> {
        self.upgrade(state)
    }

    /// Reconcile with the live URL.
    ///
    /// Called on every tick of the poll interval. Nothing observable happens while the URL stays
    /// the same.
    pub fn poll(&mut self) -> Result<bool, NavigationError> {
        let live = self.live_location()?;
        self.upgrade(Some(live))
    }
}
