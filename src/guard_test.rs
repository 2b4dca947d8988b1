use std::cell::Cell;

use super::*;
use crate::routes::Params;

fn target(path: &str, username: Option<&str>) -> NavigationTarget {
    let mut params = Params::new();
    if let Some(name) = username {
        params.insert("username".into(), name.into());
    }
    NavigationTarget { path: path.into(), params }
}

fn saved(name: Option<&str>) -> impl FnOnce() -> Option<String> {
    let name = name.map(str::to_owned);
    move || name
}

/// Run `evaluate` and collect every decision handed to the callback.
fn run(target: &NavigationTarget, identity: Option<&str>) -> Vec<GuardDecision> {
    let mut seen = Vec::new();
    evaluate(target, saved(identity), |decision| seen.push(decision));
    seen
}

// =============================================================
// Scenario table
// =============================================================

#[test]
fn scenarios() {
    let cases = [
        ("/", None, None, GuardDecision::Proceed),
        ("/chat/bob", Some("bob"), None, GuardDecision::Proceed),
        ("/chat/", Some(""), None, GuardDecision::RedirectTo("/".into())),
        ("/chat/", Some(""), Some("carol"), GuardDecision::RedirectTo("/chat/carol".into())),
        ("/chat/bob", Some("bob"), Some("carol"), GuardDecision::Proceed),
    ];
    for (path, param, identity, expected) in cases {
        assert_eq!(run(&target(path, param), identity), vec![expected], "{path} {param:?} {identity:?}");
    }
}

// =============================================================
// Non-chat paths
// =============================================================

#[test]
fn non_chat_paths_always_proceed() {
    for path in ["/", "/register", "/nowhere", "/about/chat"] {
        for identity in [None, Some(""), Some("alice")] {
            assert_eq!(decide(&target(path, None), saved(identity)), GuardDecision::Proceed);
        }
    }
}

#[test]
fn non_chat_paths_never_read_identity() {
    let reads = Cell::new(0);
    let decision = decide(&target("/register", None), || {
        reads.set(reads.get() + 1);
        Some("alice".into())
    });
    assert_eq!(decision, GuardDecision::Proceed);
    assert_eq!(reads.get(), 0);
}

// =============================================================
// Chat paths
// =============================================================

#[test]
fn chat_param_wins_over_different_saved_identity() {
    assert_eq!(decide(&target("/chat/bob", Some("bob")), saved(Some("carol"))), GuardDecision::Proceed);
}

#[test]
fn absent_and_empty_param_are_equivalent() {
    for identity in [None, Some("alice")] {
        let absent = decide(&target("/chat/", None), saved(identity));
        let empty = decide(&target("/chat/", Some("")), saved(identity));
        assert_eq!(absent, empty);
    }
}

#[test]
fn absent_and_empty_identity_are_equivalent() {
    let absent = decide(&target("/chat/", Some("")), saved(None));
    let empty = decide(&target("/chat/", Some("")), saved(Some("")));
    assert_eq!(absent, GuardDecision::RedirectTo("/".into()));
    assert_eq!(empty, absent);
}

#[test]
fn saved_identity_redirects_to_own_room() {
    assert_eq!(
        decide(&target("/chat/", Some("")), saved(Some("alice"))),
        GuardDecision::RedirectTo("/chat/alice".into())
    );
}

#[test]
fn bare_chat_prefix_is_guarded() {
    assert_eq!(decide(&target("/chat", None), saved(None)), GuardDecision::RedirectTo("/".into()));
    assert_eq!(
        decide(&target("/chatroom", None), saved(Some("dave"))),
        GuardDecision::RedirectTo("/chat/dave".into())
    );
}

#[test]
fn saved_identity_is_not_escaped() {
    assert_eq!(
        decide(&target("/chat/", Some("")), saved(Some("a b/c"))),
        GuardDecision::RedirectTo("/chat/a b/c".into())
    );
}

#[test]
fn chat_paths_read_identity_exactly_once() {
    for param in [None, Some(""), Some("bob")] {
        let reads = Cell::new(0);
        decide(&target("/chat/bob", param), || {
            reads.set(reads.get() + 1);
            None
        });
        assert_eq!(reads.get(), 1, "{param:?}");
    }
}

// =============================================================
// Completion contract
// =============================================================

#[test]
fn completion_runs_exactly_once_for_every_combination() {
    for path in ["/", "/chat/", "/chat/bob"] {
        for param in [None, Some(""), Some("bob")] {
            for identity in [None, Some(""), Some("carol")] {
                assert_eq!(run(&target(path, param), identity).len(), 1);
            }
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let t = target("/chat/", Some(""));
    let first = run(&t, Some("carol"));
    let second = run(&t, Some("carol"));
    assert_eq!(first, second);
}
