#![allow(non_snake_case)]

use std::{cell::RefCell, rc::Rc, sync::Arc};

use dioxus::prelude::*;
use dioxus_core::{schedule_update, DynamicNode, Properties};
use dioxus_intercept::{LocationState, Navigator, NavigatorConfig, Query};
use tracing::error;

use crate::{SharedNavigator, Subscription, WebHost};

/// The props a wrapped component is rendered with.
#[derive(Props, Clone, PartialEq)]
pub struct RoutedProps<P: Clone + PartialEq + 'static> {
    /// The path of the current URL.
    pub path: String,
    /// Same as `path`.
    pub pathname: String,
    /// The query parameters of the current URL, `None` when there are none.
    pub query: Option<Query>,
    /// The fragment of the current URL without `#`, `None` when there is none.
    pub hash: Option<String>,
    /// The props passed through the wrapper untouched.
    pub props: P,
}

impl<P: Clone + PartialEq + 'static> RoutedProps<P> {
    /// Combine a location with the pass-through props.
    pub fn new(location: LocationState, props: P) -> Self {
        let LocationState { path, query, hash } = location;
        Self {
            pathname: path.clone(),
            path,
            query,
            hash,
            props,
        }
    }

    /// Replace every location field the overrides set explicitly.
    pub fn with_overrides(mut self, overrides: &LocationOverrides) -> Self {
        if let Some(path) = &overrides.path {
            self.path = path.clone();
        }
        if let Some(pathname) = &overrides.pathname {
            self.pathname = pathname.clone();
        }
        if let Some(query) = &overrides.query {
            self.query = query.clone();
        }
        if let Some(hash) = &overrides.hash {
            self.hash = hash.clone();
        }
        self
    }
}

/// Location props set explicitly by the parent. Explicit values win over the ones derived from
/// the URL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationOverrides {
    /// Fixed `path`.
    pub path: Option<String>,
    /// Fixed `pathname`.
    pub pathname: Option<String>,
    /// Fixed `query`; `Some(None)` forces "no query".
    pub query: Option<Option<Query>>,
    /// Fixed `hash`; `Some(None)` forces "no fragment".
    pub hash: Option<Option<String>>,
}

/// The props of [`NavigationWrapper`].
#[derive(Props, Clone)]
pub struct NavigationWrapperProps<P: Clone + PartialEq + 'static> {
    /// The component rendered with the current location.
    pub component: fn(RoutedProps<P>) -> Element,

    /// Props forwarded to `component`.
    pub props: P,

    /// Location props that take precedence over the live location.
    #[props(default)]
    pub overrides: LocationOverrides,

    /// Poll interval and event name.
    ///
    /// Read once when the wrapper mounts; changing it afterwards has no effect until the wrapper
    /// is remounted.
    #[props(default)]
    pub config: NavigatorConfig,
}

impl<P: Clone + PartialEq + 'static> PartialEq for NavigationWrapperProps<P> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.component, other.component)
            && self.props == other.props
            && self.overrides == other.overrides
            && self.config == other.config
    }
}

/// Render `component` with the current location and keep it in sync with the URL.
///
/// While mounted, the wrapper intercepts clicks on internal links anywhere in the document body,
/// follows back/forward navigation and polls the live URL. Everything is torn down on unmount.
///
/// If the wrapper cannot reach the browser (no `window`, no `body`) it logs the failure and
/// renders nothing.
pub fn NavigationWrapper<P: Clone + PartialEq + 'static>(
    props: NavigationWrapperProps<P>,
) -> Element {
    let mounted = use_hook(|| Mounted::attach(props.config.clone(), schedule_update()));

    {
        let mounted = mounted.clone();
        use_drop(move || {
            if let Some(mounted) = mounted {
                mounted.detach();
            }
        });
    }

    let Some(mounted) = mounted else {
        return VNode::empty();
    };

    let routed = RoutedProps::new(mounted.location(), props.props.clone())
        .with_overrides(&props.overrides);
    let node = DynamicNode::Component(routed.into_vcomponent(props.component));

    rsx! {
        {node}
    }
}

/// The per-instance state of a mounted wrapper.
#[derive(Clone)]
struct Mounted {
    navigator: SharedNavigator,
    subscription: Rc<RefCell<Option<Subscription>>>,
}

impl Mounted {
    fn attach(config: NavigatorConfig, on_change: Arc<dyn Fn() + Send + Sync>) -> Option<Self> {
        let navigator = match WebHost::new().and_then(|host| Navigator::new(host, config)) {
            Ok(navigator) => Rc::new(RefCell::new(navigator)),
            Err(err) => {
                error!(%err, "failed to read the document location");
                return None;
            }
        };

        let subscription = match Subscription::attach(navigator.clone(), on_change) {
            Ok(subscription) => subscription,
            Err(err) => {
                error!(%err, "failed to attach navigation listeners");
                return None;
            }
        };

        Some(Self {
            navigator,
            subscription: Rc::new(RefCell::new(Some(subscription))),
        })
    }

    fn location(&self) -> LocationState {
        self.navigator.borrow().current().clone()
    }

    fn detach(&self) {
        self.subscription.borrow_mut().take();
    }
}
