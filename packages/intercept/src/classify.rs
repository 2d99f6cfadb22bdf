/// Prefixes that mark an href as leaving the page, compared case-insensitively.
const ABSOLUTE_PREFIXES: [&str; 3] = ["http://", "https://", "//"];

/// Whether `href` stays within the page and may be intercepted.
///
/// Anything absolute (`http://`, `https://`) or protocol-relative (`//`) is left to the browser.
///
/// ```rust
/// # use dioxus_intercept::is_internal;
/// assert!(is_internal("/a/b"));
/// assert!(is_internal("a/b"));
/// assert!(!is_internal("HTTPS://example.com"));
/// assert!(!is_internal("//cdn.example.com/lib.js"));
/// ```
pub fn is_internal(href: &str) -> bool {
    !ABSOLUTE_PREFIXES.iter().any(|prefix| {
        href.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// A click that landed inside an anchor carrying an `href`.
///
/// The renderer resolves the nearest enclosing `a[href]` of the click target and describes it
/// with this type, the navigator never sees DOM nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorClick {
    /// The raw `href` attribute, as written in the markup.
    pub href: String,
    /// Whether the anchor has a `target` attribute, whatever its value.
    pub has_target: bool,
    /// The visible text of the link, used as the history entry title.
    pub text: String,
}

impl AnchorClick {
    /// Describe a click on an anchor without `target` and without text.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Default::default()
        }
    }

    /// Mark the anchor as carrying a `target` attribute.
    pub fn with_target(mut self) -> Self {
        self.has_target = true;
        self
    }

    /// Set the visible text of the anchor.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Whether the navigator should take over this click.
    pub fn should_intercept(&self) -> bool {
        !self.has_target && is_internal(&self.href)
    }
}
