use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Адреса сервиса читаются один раз и раздаются видам через контекст.
    provide_context(load_config());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
