use std::{cell::RefCell, rc::Rc, sync::Arc};

use dioxus_intercept::{AnchorClick, ClickOutcome, NavigationError, Navigator};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Interval;
use tracing::{error, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, PopStateEvent};

use crate::{location_from_js, WebHost};

/// A navigator shared between the component and its event listeners.
pub type SharedNavigator = Rc<RefCell<Navigator<WebHost>>>;

/// Everything that can change the location of a mounted wrapper.
///
/// Owns the body `click` listener, the window `popstate` listener and the poll interval. Dropping
/// the subscription removes all three at once, so no handler runs after the wrapper is gone.
pub struct Subscription {
    _click: EventListener,
    _popstate: EventListener,
    _poll: Interval,
}

impl Subscription {
    /// Attach all listeners for `navigator`, calling `on_change` after every accepted navigation.
    pub fn attach(
        navigator: SharedNavigator,
        on_change: Arc<dyn Fn() + Send + Sync>,
    ) -> Result<Self, NavigationError> {
        let (window, millis) = {
            let navigator = navigator.borrow();
            (
                navigator.host().window().clone(),
                navigator.config().poll_millis(),
            )
        };
        let body = window
            .document()
            .and_then(|document| document.body())
            .ok_or_else(|| NavigationError::Platform("document has no body".to_string()))?;

        let click = {
            let navigator = navigator.clone();
            let on_change = on_change.clone();
            // gloo listeners are passive by default, which would swallow `preventDefault`
            let options = EventListenerOptions::enable_prevent_default();
            EventListener::new_with_options(&body, "click", options, move |event| {
                let click = anchor_click(event);
                let candidate = click.as_ref().is_some_and(AnchorClick::should_intercept);
                let outcome = apply(&navigator, &on_change, |nav| nav.handle_click(click));
                match outcome {
                    Some(Ok(ClickOutcome::Ignored)) => {}
                    Some(Ok(ClickOutcome::Intercepted)) => event.prevent_default(),
                    Some(Err(err)) => {
                        // only internal links reach the failing path; the page must not reload
                        event.prevent_default();
                        error!(%err, "failed to follow intercepted link");
                    }
                    // re-entrant click on an internal link: not followed, but no page load either
                    None if candidate => event.prevent_default(),
                    None => {}
                }
            })
        };

        let popstate = {
            let navigator = navigator.clone();
            let on_change = on_change.clone();
            EventListener::new(&window, "popstate", move |event| {
                let state = event
                    .dyn_ref::<PopStateEvent>()
                    .and_then(|event| location_from_js(event.state()));
                if let Some(Err(err)) =
                    apply(&navigator, &on_change, |nav| nav.handle_popstate(state))
                {
                    error!(%err, "failed to apply history navigation");
                }
            })
        };

        let poll = Interval::new(millis, move || {
            if let Some(Err(err)) = apply(&navigator, &on_change, Navigator::poll) {
                error!(%err, "failed to reconcile with the live url");
            }
        });

        Ok(Self {
            _click: click,
            _popstate: popstate,
            _poll: poll,
        })
    }
}

/// Run `f` against the navigator and schedule a re-render if it accepted a navigation.
///
/// Returns `None` when the navigator is already borrowed further up the stack.
fn apply<T>(
    navigator: &SharedNavigator,
    on_change: &Arc<dyn Fn() + Send + Sync>,
    f: impl FnOnce(&mut Navigator<WebHost>) -> Result<T, NavigationError>,
) -> Option<Result<T, NavigationError>> {
    let (result, changed) = {
        let Ok(mut navigator) = navigator.try_borrow_mut() else {
            warn!("navigator busy, dropping re-entrant event");
            return None;
        };
        let before = navigator.revision();
        let result = f(&mut *navigator);
        (result, navigator.revision() != before)
    };

    if changed {
        on_change();
    }
    Some(result)
}

/// Describe the nearest `a[href]` enclosing the click target, if any.
fn anchor_click(event: &Event) -> Option<AnchorClick> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let anchor = target.closest("a[href]").ok()??;
    let href = anchor.get_attribute("href")?;
    let text = anchor
        .dyn_ref::<HtmlElement>()
        .map(HtmlElement::inner_text)
        .unwrap_or_default();

    Some(AnchorClick {
        href,
        has_target: anchor.has_attribute("target"),
        text,
    })
}
