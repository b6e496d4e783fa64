//! Chat - View Component

use super::api::send_query;
use super::state::{ChatState, Message, Sender};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Плавно прокрутить ленту к элементу
fn scroll_into_view_smooth(element: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn bubble_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "chat__message chat__message--user",
        Sender::Bot => "chat__message chat__message--bot",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ChatView() -> impl IntoView {
    let config = use_config();
    let state = RwSignal::new(ChatState::new());
    let input = RwSignal::new(String::new());
    let chat_end_ref = NodeRef::<leptos::html::Div>::new();

    let messages = Memo::new(move |_| state.with(|s| s.messages().to_vec()));
    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading()));

    // Прокрутка к последнему сообщению после каждого изменения ленты
    Effect::new(move |_| {
        messages.track();
        if let Some(end) = chat_end_ref.get() {
            request_animation_frame(move || scroll_into_view_smooth(&end));
        }
    });

    let handle_send = Callback::new(move |_: ()| {
        let draft = input.get_untracked();
        let Some(text) = state.try_update(|s| s.begin_send(&draft)).flatten() else {
            return;
        };
        input.set(String::new());

        let api = config.api.clone();
        let user_id = config.chat.user_id;
        spawn_local(async move {
            let result = send_query(&api, user_id, &text).await;
            state.update(|s| s.complete(result));
        });
    });

    view! {
        <div class="card">
            <h2 class="card__title">"AI Chat"</h2>

            // Лента сообщений
            <div class="chat__messages">
                <For
                    each=move || messages.get()
                    key=|msg: &Message| msg.id
                    let:msg
                >
                    <div class=bubble_class(msg.sender)>
                        {msg.text.clone()}
                    </div>
                </For>
                <div node_ref=chat_end_ref></div>
            </div>

            // Ввод
            <div class="chat__input-row">
                <input
                    type="text"
                    class="chat__input"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !is_loading.get_untracked() {
                            ev.prevent_default();
                            handle_send.run(());
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || is_loading.get())
                    on_click=move |_| handle_send.run(())
                >
                    {move || {
                        if is_loading.get() {
                            view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                        } else {
                            icon("send")
                        }
                    }}
                </Button>
            </div>
        </div>
    }
}
