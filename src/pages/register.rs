//! Registration page.

use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="register-page">
            <h1>"Create an account"</h1>
            <a href="/" class="login-link">
                "Back to sign in"
            </a>
        </div>
    }
}
