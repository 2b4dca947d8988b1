//! Static route table mapping URL paths to views.
//!
//! DESIGN
//! ======
//! Routes are plain data. Matching is segment-wise and positional: a
//! `:name` segment binds the percent-decoded text at that position, an
//! empty segment included, so `/chat/` reaches the chat route with an
//! empty `username` and `/chat/al%20ice` binds `al ice`. Policy about
//! whether a match may be entered lives in `guard`, never here.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::BTreeMap;

use crate::error::NavigationError;

/// Path of the login view, also the guard's fallback redirect.
pub const LOGIN_PATH: &str = "/";

/// Fixed prefix shared by every chat path.
pub const CHAT_PREFIX: &str = "/chat";

/// Name of the chat route's dynamic segment.
pub const USERNAME_PARAM: &str = "username";

/// Dynamic segment bindings extracted from a matched path.
pub type Params = BTreeMap<String, String>;

/// Views the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    Register,
    Chat,
}

/// A single path pattern bound to a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub pattern: &'static str,
    pub view: ViewId,
    /// Whether matched params are handed to the view as props.
    pub forward_params: bool,
}

/// The application's routes, in match order.
pub static ROUTES: &[Route] = &[
    Route { pattern: "/", view: ViewId::Login, forward_params: false },
    Route { pattern: "/register", view: ViewId::Register, forward_params: false },
    Route { pattern: "/chat/:username", view: ViewId::Chat, forward_params: true },
];

/// A requested path together with the params its route bound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    pub params: Params,
}

impl NavigationTarget {
    /// Target for `path` with the params of the first matching route, or no
    /// params when nothing matches.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        let params = match_path(path).map(|(_, params)| params).unwrap_or_default();
        Self { path: path.to_owned(), params }
    }

    /// Look up a bound param by segment name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl Route {
    /// Match `path` against this route, returning the bound params.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<Params> {
        let pattern = split_segments(self.pattern);
        let mut segments = split_segments(path);

        if let Some(params) = bind(&pattern, &segments) {
            return Some(params);
        }

        // A trailing slash on a static path is not its own segment.
        if segments.len() > 1 && segments.last() == Some(&"") {
            segments.pop();
            return bind(&pattern, &segments);
        }
        None
    }
}

/// Find the first route matching `path`.
#[must_use]
pub fn match_path(path: &str) -> Option<(&'static Route, Params)> {
    ROUTES.iter().find_map(|route| route.matches(path).map(|params| (route, params)))
}

/// Resolve `path` into its route and navigation target.
///
/// # Errors
///
/// Returns [`NavigationError::NoMatch`] if no route matches.
pub fn resolve(path: &str) -> Result<(&'static Route, NavigationTarget), NavigationError> {
    let (route, params) = match_path(path).ok_or_else(|| NavigationError::NoMatch(path.to_owned()))?;
    Ok((route, NavigationTarget { path: path.to_owned(), params }))
}

/// Build the chat path for `username`. The value is inserted verbatim.
#[must_use]
pub fn chat_path(username: &str) -> String {
    format!("{CHAT_PREFIX}/{username}")
}

fn split_segments(path: &str) -> Vec<&str> {
    path.strip_prefix('/').unwrap_or(path).split('/').collect()
}

fn bind(pattern: &[&str], segments: &[&str]) -> Option<Params> {
    if pattern.len() != segments.len() {
        return None;
    }
    let mut params = Params::new();
    for (expected, actual) in pattern.iter().zip(segments) {
        match expected.strip_prefix(':') {
            Some(name) => {
                params.insert(name.to_owned(), decode_segment(actual));
            }
            None if expected == actual => {}
            None => return None,
        }
    }
    Some(params)
}

/// Percent-decode a path segment. Segments that do not decode to UTF-8 are
/// bound as written.
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment).map_or_else(|_| segment.to_owned(), std::borrow::Cow::into_owned)
}
