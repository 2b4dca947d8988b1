//! Navigation runtime: resolve, guard, follow redirects.
//!
//! Every hop runs the entry guard before its route is committed, the way a
//! global before-each hook does, so even a path with no route (e.g.
//! `/chat`) is guarded first. Redirects are followed until the guard
//! proceeds or the configured hop limit is exceeded.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use crate::config::NavigatorConfig;
use crate::error::NavigationError;
use crate::guard::{self, GuardDecision};
use crate::identity::{IdentityStore, read_identity};
use crate::routes::{NavigationTarget, Params, ViewId, resolve};

/// A committed navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Final path after redirects.
    pub path: String,
    pub view: ViewId,
    /// Params forwarded to the view; empty unless the route forwards them.
    pub params: Params,
    /// Guard redirects followed to reach `path`.
    pub redirects: usize,
}

impl Resolution {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

pub struct Navigator<S> {
    store: S,
    config: NavigatorConfig,
}

impl<S: IdentityStore> Navigator<S> {
    pub fn new(store: S, config: NavigatorConfig) -> Self {
        Self { store, config }
    }

    /// Navigate to `path`.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::RedirectLoop`] if the guard redirects more than
    ///   `max_redirects` times.
    /// - [`NavigationError::NoMatch`] if the path the guard lets through has
    ///   no route.
    pub fn navigate(&self, path: &str) -> Result<Resolution, NavigationError> {
        let mut path = path.to_owned();
        let mut redirects = 0;

        loop {
            let target = NavigationTarget::for_path(&path);
            let mut decision = GuardDecision::Proceed;
            guard::evaluate(&target, || read_identity(&self.store), |d| decision = d);

            match decision {
                GuardDecision::Proceed => return commit(path, redirects),
                GuardDecision::RedirectTo(next) => {
                    redirects += 1;
                    if redirects > self.config.max_redirects {
                        log::warn!("redirect limit {} exceeded at {next}", self.config.max_redirects);
                        return Err(NavigationError::RedirectLoop { path: next, limit: self.config.max_redirects });
                    }
                    log::debug!("redirect {path} -> {next}");
                    path = next;
                }
            }
        }
    }
}

fn commit(path: String, redirects: usize) -> Result<Resolution, NavigationError> {
    let (route, target) = resolve(&path).inspect_err(|_| log::warn!("no route for {path}"))?;
    let params = if route.forward_params { target.params } else { Params::new() };
    Ok(Resolution { path: target.path, view: route.view, params, redirects })
}
