//! Entry guard run before every navigation.
//!
//! DESIGN
//! ======
//! The chat view needs a username. A username in the URL always wins;
//! the persisted identity is only a fallback consulted when the URL has
//! none, so a returning user who opens the chat route without a name is
//! sent to their own room instead of back to login. With neither, the
//! user goes to login.
//!
//! The guard is pure over its inputs: the identity is read through an
//! injected reader, at most once, and the completion callback is `FnOnce`
//! so it cannot be invoked twice.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{CHAT_PREFIX, LOGIN_PATH, NavigationTarget, USERNAME_PARAM, chat_path};

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectTo(String),
}

/// Evaluate the guard for `target` and hand the decision to `complete`.
///
/// `read_identity` is called only for chat paths, and then exactly once.
pub fn evaluate<R, C>(target: &NavigationTarget, read_identity: R, complete: C)
where
    R: FnOnce() -> Option<String>,
    C: FnOnce(GuardDecision),
{
    complete(decide(target, read_identity));
}

/// Compute the guard decision for `target`.
pub fn decide<R>(target: &NavigationTarget, read_identity: R) -> GuardDecision
where
    R: FnOnce() -> Option<String>,
{
    if !target.path.starts_with(CHAT_PREFIX) {
        return GuardDecision::Proceed;
    }

    let param = target.param(USERNAME_PARAM).filter(|name| !name.is_empty());
    let saved = read_identity().filter(|name| !name.is_empty());

    let decision = match (param, saved) {
        (None, None) => GuardDecision::RedirectTo(LOGIN_PATH.to_owned()),
        (None, Some(saved)) => GuardDecision::RedirectTo(chat_path(&saved)),
        (Some(_), _) => GuardDecision::Proceed,
    };
    log::debug!("guard: {} -> {decision:?}", target.path);
    decision
}
