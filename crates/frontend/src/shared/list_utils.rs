/// Утилиты списочных экранов: поле поиска, подсветка совпадений, заголовки сортировки
use contracts::shared::list_query::{self, SortSpec, MIN_SEARCH_LEN};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Поиск реально применяется (пусто или от 3 символов)
pub fn is_search_active(text: &str) -> bool {
    matches!(
        list_query::SearchInput::classify(text),
        list_query::SearchInput::Commit(_)
    )
}

/// Байтовые диапазоны совпадений `filter` в `text` без учёта регистра
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let needle: Vec<char> = filter.trim().chars().map(fold).collect();
    if needle.len() < MIN_SEARCH_LEN {
        return Vec::new();
    }

    let indexed: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= indexed.len() {
        let window = &indexed[i..i + needle.len()];
        if window.iter().zip(&needle).all(|((_, c), n)| fold(*c) == *n) {
            let start = indexed[i].0;
            let end = indexed
                .get(i + needle.len())
                .map_or(text.len(), |(pos, _)| *pos);
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Подсветка совпадений в тексте ячейки
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! {
            <span style="background-color: #ff9800; color: white; padding: 1px 2px; border-radius: 2px; font-weight: 500;">
                {text[start..end].to_string()}
            </span>
        }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// CSS-класс индикатора сортировки
pub fn sort_class(current: Option<&SortSpec>, field: &str) -> &'static str {
    match current {
        Some(spec) if spec.field == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

/// Поле поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение (из контроллера списка)
    #[prop(into)]
    value: Signal<String>,
    /// Вызывается после паузы ввода
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Поиск (мин. {} символа)...", MIN_SEARCH_LEN)
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    // сброс/восстановление отбора снаружи
    Effect::new(move |_| input_value.set(value.get()));
    // новый таймер заменяет старый; drop старого отменяет его
    let debounce = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        debounce.set_value(Some(timeout));
    };

    let clear = move |_| {
        debounce.set_value(None);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_search_active(&value.get()) { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear
                        title="Очистить"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
