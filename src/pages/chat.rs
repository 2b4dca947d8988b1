//! Chat room page.

use leptos::prelude::*;

/// Chat room for `username`, forwarded from the `/chat/:username` route.
#[component]
pub fn ChatPage(username: String) -> impl IntoView {
    view! {
        <div class="chat-page">
            <h1>"Chat"</h1>
            <p class="chat-user">{format!("Signed in as {username}")}</p>
        </div>
    }
}
