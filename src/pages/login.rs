//! Login page.

use leptos::prelude::*;

/// Login page. The sign-in form itself is provided by the auth feature.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Chat"</h1>
            <p>"Sign in to continue"</p>
            <a href="/register" class="register-link">
                "Create an account"
            </a>
        </div>
    }
}
