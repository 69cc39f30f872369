//! Сортируемая ячейка заголовка таблицы
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Сумма"
//!     sort_field="amount"
//!     current_sort=Signal::derive(move || session.sort())
//!     on_sort=Callback::new(move |field: String| session.toggle_sort(&field))
//!     align="right"
//! />
//! ```

use contracts::shared::list_query::SortSpec;
use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::sort_class;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Ключ `sortBy`
    sort_field: &'static str,

    #[prop(into)]
    current_sort: Signal<Option<SortSpec>>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// left / right
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px; max-width: calc(100% - 12px);"
    } else {
        "cursor: pointer; padding-right: 12px; max-width: calc(100% - 12px);"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field.to_string())
            >
                {label}
                <span class=move || current_sort.with(|s| sort_class(s.as_ref(), sort_field))>
                    {move || current_sort.with(|s| SortSpec::indicator(s.as_ref(), sort_field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
