//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::NavigatorConfig;
use crate::error::NavigationError;
use crate::identity::BrowserStorage;
use crate::navigator::{Navigator, Resolution};
use crate::pages::{chat::ChatPage, login::LoginPage, register::RegisterPage};
use crate::routes::{USERNAME_PARAM, ViewId};

/// Root application component.
///
/// Provides the navigator config and hands every location change to
/// [`RoutedView`], which owns route matching and the entry guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(NavigatorConfig::from_build_env());

    view! {
        <Title text="Chat"/>

        <Router>
            <RoutedView/>
        </Router>
    }
}

/// Resolves the current location through the navigator and renders the
/// matching view. When the guard redirected, the browser URL is replaced
/// with the final path.
#[component]
fn RoutedView() -> impl IntoView {
    let config = expect_context::<NavigatorConfig>();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| Navigator::new(BrowserStorage, config).navigate(&location.pathname.get()));

    Effect::new(move || {
        if let Ok(res) = outcome.get() {
            if res.path != location.pathname.get_untracked() {
                navigate(&res.path, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });

    move || match outcome.get() {
        Ok(res) => render_view(&res),
        Err(NavigationError::NoMatch(_)) => view! { <p class="not-found">"Page not found."</p> }.into_any(),
        Err(e) => view! { <p class="nav-error">{e.to_string()}</p> }.into_any(),
    }
}

fn render_view(res: &Resolution) -> AnyView {
    match res.view {
        ViewId::Login => view! { <LoginPage/> }.into_any(),
        ViewId::Register => view! { <RegisterPage/> }.into_any(),
        ViewId::Chat => {
            let username = res.param(USERNAME_PARAM).unwrap_or_default().to_owned();
            view! { <ChatPage username/> }.into_any()
        }
    }
}
