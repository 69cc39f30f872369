use leptos::prelude::*;
use thaw::*;

use crate::layout::tabs::{render_tab_content, tab_icon, tab_screens};
use crate::shared::icons::icon;
use crate::shared::state::form_state_manager::FormStateStore;

#[component]
pub fn App() -> impl IntoView {
    // Отбор списков переживает переключение вкладок
    provide_context(RwSignal::new(FormStateStore::new()));

    let screens = tab_screens();
    let active = RwSignal::new(screens[0].id.to_string());

    view! {
        <div class="app">
            <header class="app__header">
                <span class="app__title">"Back-office"</span>
                <TabList selected_value=active>
                    {screens
                        .into_iter()
                        .map(|screen| view! {
                            <Tab value=screen.id.to_string()>
                                {icon(tab_icon(screen.id))}
                                " "
                                {screen.title}
                            </Tab>
                        })
                        .collect_view()}
                </TabList>
            </header>
            <main class="app__content">
                {move || render_tab_content(&active.get())}
            </main>
        </div>
    }
}
