//! Content - View Component

use super::api::{save_content, start_scraping};
use super::state::{scrape_outcome, ContentState, ContentTab};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::notify::alert;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ContentView() -> impl IntoView {
    let config = use_config();
    let state = RwSignal::new(ContentState::new());
    let selected_tab_value = RwSignal::new(ContentTab::default().key().to_string());

    let active_tab = Memo::new(move |_| state.with(|s| s.active_tab()));
    let saved = Memo::new(move |_| state.with(|s| s.saved().to_vec()));

    // Sync selected_tab_value -> state
    Effect::new(move |_| {
        let key = selected_tab_value.get();
        if let Some(tab) = ContentTab::from_key(&key) {
            state.update(|s| s.set_active_tab(tab));
        }
    });

    let scrape_api = config.api.clone();
    let handle_scraping = move |_: ev::MouseEvent| {
        let api = scrape_api.clone();
        spawn_local(async move {
            let result = start_scraping(&api).await;
            if let Some(message) = scrape_outcome(&result) {
                alert(message);
            }
        });
    };

    let save_api = config.api.clone();
    let handle_save = move |_: ev::MouseEvent| {
        let text = match state.with_untracked(|s| s.begin_save()) {
            Ok(text) => text,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        let api = save_api.clone();
        spawn_local(async move {
            let result = save_content(&api, &text).await;
            state.update(|s| {
                s.apply_save_result(text, &result);
            });
        });
    };

    view! {
        <div class="card card--narrow">
            <TabList selected_value=selected_tab_value>
                {ContentTab::ALL
                    .into_iter()
                    .map(|tab| view! { <Tab value=tab.key()>{tab.label()}</Tab> })
                    .collect_view()}
            </TabList>

            {move || match active_tab.get() {
                ContentTab::WebScraping => {
                    let handle_scraping = handle_scraping.clone();
                    view! {
                        <div class="content__section">
                            <h2>"Web Scraping Page"</h2>
                            <p class="content__hint">
                                "This page allows you to perform web scraping. Click the button below to scrape data from a website."
                            </p>
                            <Button appearance=ButtonAppearance::Primary on_click=handle_scraping>
                                {icon("globe")}
                                " Start Web Scraping"
                            </Button>
                        </div>
                    }
                        .into_any()
                }
                ContentTab::AddContent => {
                    let handle_save = handle_save.clone();
                    view! {
                        <div class="content__section">
                            <h3>"Add Content"</h3>
                            <textarea
                                class="content__textarea"
                                placeholder="Enter content..."
                                prop:value=move || state.with(|s| s.draft().to_string())
                                on:input=move |ev| state.update(|s| s.set_draft(event_target_value(&ev)))
                            ></textarea>
                            <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                                {icon("save")}
                                " Save"
                            </Button>

                            <div class="content__saved">
                                <h3>"Saved Content:"</h3>
                                <For
                                    each=move || saved.get().into_iter().enumerate()
                                    key=|(index, _)| *index
                                    children=move |(_, item)| {
                                        view! { <p class="content__saved-item">{item}</p> }
                                    }
                                />
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
