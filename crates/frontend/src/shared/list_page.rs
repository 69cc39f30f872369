use contracts::shared::list_query::ListScreen;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;

use crate::shared::components::filter_fields::filter_fields;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::export::{export_filename, export_to_csv};
use crate::shared::icons::icon;
use crate::shared::list_controller::{HttpListSource, ListSession, ListSource};
use crate::shared::list_row::ListRow;
use crate::shared::list_utils::{highlight_matches, SearchInput};

/// Списочный экран по описанию `screen`: поиск, фильтры, сортировка по
/// заголовкам, пагинация и выгрузка в CSV.
pub fn list_page<T>(screen: &'static ListScreen) -> impl IntoView
where
    T: ListRow + DeserializeOwned,
{
    let session: ListSession<T, HttpListSource> =
        ListSession::new(screen, HttpListSource::for_screen(screen));
    session.mount();

    let is_filter_expanded = RwSignal::new(false);
    let exporting = RwSignal::new(false);
    let table_id = format!("{}-table", screen.id);

    let export = move |_| {
        exporting.set(true);
        spawn_local(async move {
            let request = session.export_request();
            log::debug!("{}: выгрузка {:?}", screen.id, request.pairs());
            match ListSource::<T>::fetch(&session.source(), &request).await {
                Ok(result) => {
                    if let Err(e) = export_to_csv(&result.items, &export_filename(screen.id)) {
                        log::warn!("{}: выгрузка не удалась: {}", screen.id, e);
                    }
                }
                Err(e) => log::error!("{}: выгрузка не удалась: {}", screen.id, e),
            }
            exporting.set(false);
        });
    };

    let current_sort = Signal::derive(move || session.sort());
    let on_sort = Callback::new(move |field: String| session.toggle_sort(&field));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{screen.title}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || session.page_info().total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || session.search_input())
                        on_change=Callback::new(move |term: String| session.set_search(&term))
                    />
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || session.active_filter_count())
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || session.page_info().page_number)
                            total_pages=Signal::derive(move || session.page_info().total_pages)
                            total_count=Signal::derive(move || session.page_info().total_count)
                            page_size=Signal::derive(move || session.page_info().page_size)
                            has_next=Signal::derive(move || session.page_info().has_next)
                            has_previous=Signal::derive(move || session.page_info().has_previous)
                            on_page_change=Callback::new(move |page: usize| session.set_page(page))
                            on_page_size_change=Callback::new(move |size: usize| session.set_page_size(size))
                            page_size_options=screen.page_size_options
                        />
                    }
                    header_actions=move || view! {
                        <Flex gap=FlexGap::Small>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| session.retry()
                                disabled=Signal::derive(move || session.is_loading())
                            >
                                {icon("refresh")}
                                {move || if session.is_loading() { " Загрузка..." } else { " Обновить" }}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=export
                                disabled=Signal::derive(move || exporting.get() || session.page_info().total_count == 0)
                            >
                                {icon("download")}
                                " CSV"
                            </Button>
                        </Flex>
                    }
                    filter_content=move || filter_fields(session)
                    on_apply=Callback::new(move |_| session.apply_filters())
                    on_reset=Callback::new(move |_| session.batch(move |c| {
                        c.reset_filters();
                        if let Err(err) = c.set_page_size(screen.default_page_size) {
                            log::warn!("{}: {}", screen.id, err);
                        }
                    }))
                />

                {move || session.error().map(|err| view! {
                    <div class="alert alert--error">
                        <span>{err}</span>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| session.retry()>
                            "Повторить"
                        </Button>
                    </div>
                })}

                <div class="table-wrapper">
                    {move || session.is_loading().then(|| view! {
                        <div class="table-loading"><Spinner size=SpinnerSize::Small /></div>
                    })}

                    <Table attr:id=table_id attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {T::columns()
                                    .iter()
                                    .map(|col| {
                                        let align = if col.numeric { "right" } else { "left" };
                                        match col.sort_field {
                                            Some(field) => view! {
                                                <SortableHeaderCell
                                                    label=col.title
                                                    sort_field=field
                                                    current_sort=current_sort
                                                    on_sort=on_sort
                                                    min_width=f64::from(col.min_width)
                                                    align=align
                                                />
                                            }
                                            .into_any(),
                                            None => view! {
                                                <TableHeaderCell resizable=false min_width=f64::from(col.min_width) class="resizable">
                                                    {col.title}
                                                </TableHeaderCell>
                                            }
                                            .into_any(),
                                        }
                                    })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || session.items()
                                key=|row: &T| row.row_key()
                                children=move |row: T| {
                                    let cells = row
                                        .cells()
                                        .into_iter()
                                        .zip(T::columns())
                                        .map(|(cell, col)| {
                                            if col.numeric {
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span style="display: block; text-align: right; font-variant-numeric: tabular-nums;">
                                                                {cell}
                                                            </span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                }
                                                .into_any()
                                            } else {
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {move || highlight_matches(&cell, &session.applied_search())}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                }
                                                .into_any()
                                            }
                                        })
                                        .collect_view();
                                    view! { <TableRow>{cells}</TableRow> }
                                }
                            />
                        </TableBody>
                    </Table>

                    {move || (!session.is_loading() && session.page_info().total_count == 0).then(|| view! {
                        <div class="table-empty">"Нет данных"</div>
                    })}
                </div>
            </div>
        </div>
    }
}
