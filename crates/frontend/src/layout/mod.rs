pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell: navigation bar on top, active view below.
///
/// ```text
/// +------------------------------------------+
/// |  Chat   Add Content          (TopHeader) |
/// +------------------------------------------+
/// |              active view                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <TopHeader />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
