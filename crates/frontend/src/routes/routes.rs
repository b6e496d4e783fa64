use crate::layout::Shell;
use crate::usecases::u101_chat_query::ChatView;
use crate::usecases::u102_content_management::ContentView;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <p>"Page not found"</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ChatView />
                    <Route path=path!("/chat") view=ChatView />
                    <Route path=path!("/addContent") view=ContentView />
                </Routes>
            </Shell>
        </Router>
    }
}
