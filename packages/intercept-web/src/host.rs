use dioxus_intercept::{LocationState, NavigationError, NavigationHost};
use url::Url;
use web_sys::{CustomEvent, CustomEventInit, History, Window};

use crate::location_to_js;

/// A [`NavigationHost`] backed by the browser's [History API] and `window` events.
///
/// [History API]: https://developer.mozilla.org/en-US/docs/Web/API/History_API
#[derive(Clone)]
pub struct WebHost {
    window: Window,
    history: History,
}

impl WebHost {
    /// Create a host for the current `window`.
    ///
    /// Fails when run outside of a browsing context, e.g. in a web worker.
    pub fn new() -> Result<Self, NavigationError> {
        let window = web_sys::window()
            .ok_or_else(|| NavigationError::Platform("no `window` available".to_string()))?;
        let history = window.history().map_err(NavigationError::platform)?;
        Ok(Self { window, history })
    }

    /// The window this host reads from and dispatches to.
    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl NavigationHost for WebHost {
    fn current_url(&self) -> Result<Url, NavigationError> {
        let href = self
            .window
            .location()
            .href()
            .map_err(NavigationError::platform)?;
        Ok(Url::parse(&href)?)
    }

    fn push_entry(
        &self,
        state: &LocationState,
        title: &str,
        url: &str,
    ) -> Result<(), NavigationError> {
        let data = location_to_js(state)?;
        self.history
            .push_state_with_url(&data, title, Some(url))
            .map_err(NavigationError::platform)
    }

    fn broadcast(&self, event: &str, state: &LocationState) -> Result<(), NavigationError> {
        let init = CustomEventInit::new();
        init.set_detail(&location_to_js(state)?);

        let event = CustomEvent::new_with_event_init_dict(event, &init)
            .map_err(NavigationError::platform)?;
        self.window
            .dispatch_event(&event)
            .map(|_| ())
            .map_err(NavigationError::platform)
    }
}
