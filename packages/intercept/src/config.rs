use std::time::Duration;

/// The interval between two reconciliations of the held state with the live URL.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// The name of the page-wide event dispatched for every accepted navigation.
pub const DEFAULT_EVENT_NAME: &str = "navigation";

/// Configuration for a [`Navigator`](crate::Navigator).
///
/// # Example
///
/// ```rust
/// # use dioxus_intercept::NavigatorConfig;
/// # use std::time::Duration;
/// let mut cfg = NavigatorConfig::default();
/// cfg.poll_interval(Duration::from_millis(50)).event_name("route-change");
/// assert_eq!(cfg.poll_millis(), 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigatorConfig {
    pub(crate) poll_interval: Duration,
    pub(crate) event_name: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            event_name: DEFAULT_EVENT_NAME.to_string(),
        }
    }
}

impl NavigatorConfig {
    /// Set how often the live URL is compared with the held state.
    ///
    /// The poll only exists to catch code elsewhere on the page rewriting the URL without going
    /// through the navigator. A zero interval is bumped to one millisecond.
    pub fn poll_interval(&mut self, interval: Duration) -> &mut Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Set the name of the event broadcast on every accepted navigation.
    pub fn event_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.event_name = name.into();
        self
    }

    /// The poll interval.
    pub fn interval(&self) -> Duration {
        self.poll_interval
    }

    /// The poll interval in whole milliseconds, saturating at `u32::MAX`.
    pub fn poll_millis(&self) -> u32 {
        u32::try_from(self.poll_interval.as_millis()).unwrap_or(u32::MAX)
    }

    /// The broadcast event name.
    pub fn name(&self) -> &str {
        &self.event_name
    }
}
