use contracts::shared::list_query::{FilterField, FilterKind, FilterValue};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::list_controller::{ListSession, ListSource};

const INPUT_STYLE: &str =
    "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; min-width: 160px;";

/// Поля черновика фильтров по описанию экрана.
/// Ввод меняет только черновик, запрос уходит по "Применить".
pub fn filter_fields<T, S>(session: ListSession<T, S>) -> impl IntoView
where
    T: Clone + 'static,
    S: ListSource<T> + Clone + 'static,
{
    let fields = session.screen().filters;
    view! {
        <Flex gap=FlexGap::Medium align=FlexAlign::End attr:style="flex-wrap: wrap;">
            {fields
                .iter()
                .map(|field| filter_field(session, field))
                .collect_view()}
        </Flex>
    }
}

fn filter_field<T, S>(session: ListSession<T, S>, field: &'static FilterField) -> AnyView
where
    T: Clone + 'static,
    S: ListSource<T> + Clone + 'static,
{
    let key = field.key;
    let input_text = move || session.draft(key).map(|v| v.input_text()).unwrap_or_default();

    let control = match field.kind {
        FilterKind::Text => view! {
            <input
                type="text"
                style=INPUT_STYLE
                prop:value=input_text
                on:input=move |ev| session.set_filter_draft(key, FilterValue::Text(event_target_value(&ev)))
            />
        }
        .into_any(),
        // on:change, а не on:input: нечисловой ввод очищается только после ввода
        FilterKind::Number { .. } => view! {
            <input
                type="text"
                inputmode="decimal"
                style=INPUT_STYLE
                prop:value=input_text
                on:change=move |ev| session.set_filter_draft(key, FilterValue::number_input(&event_target_value(&ev)))
            />
        }
        .into_any(),
        FilterKind::Boolean => view! {
            <select
                style=INPUT_STYLE
                prop:value=input_text
                on:change=move |ev| session.set_filter_draft(key, FilterValue::boolean_input(&event_target_value(&ev)))
            >
                <option value="">"Все"</option>
                <option value="true">"Да"</option>
                <option value="false">"Нет"</option>
            </select>
        }
        .into_any(),
        FilterKind::Enum { options } => view! {
            <select
                style=INPUT_STYLE
                prop:value=input_text
                on:change=move |ev| session.set_filter_draft(key, FilterValue::enum_input(&event_target_value(&ev)))
            >
                <option value="">"Все"</option>
                {options
                    .iter()
                    .map(|o| view! { <option value=o.code>{o.label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FilterKind::DateRange { .. } => {
            let bound = move |pick_from: bool| {
                match session.draft(key) {
                    Some(FilterValue::DateRange { from, to }) => {
                        let b = if pick_from { from } else { to };
                        b.map(|d| d.input_value()).unwrap_or_default()
                    }
                    _ => String::new(),
                }
            };
            return view! {
                <DateRangePicker
                    date_from=Signal::derive(move || bound(true))
                    date_to=Signal::derive(move || bound(false))
                    on_change=Callback::new(move |(from, to): (String, String)| {
                        session.set_filter_draft(key, FilterValue::date_range_input(&from, &to));
                    })
                    label=format!("{}:", field.label)
                />
            }
            .into_any();
        }
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Label>{format!("{}:", field.label)}</Label>
            {control}
        </Flex>
    }
    .into_any()
}
