use contracts::shared::list_query::{
    AppliedQuery, FilterValue, ListQueryError, ListScreen, QueryRequest, SortSpec,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::controller::{Completion, FetchTicket, ListController};
use super::pagination::PageInfo;
use super::source::ListSource;
use crate::shared::state::form_state_manager::FormStateStore;

/// Реактивная обёртка над [`ListController`] для компонентов.
///
/// Copy-хэндл: контроллер лежит в локальном сигнале, источник данных в
/// `StoredValue`. Запросы отправляются через `spawn_local`, ответ
/// возвращается в контроллер, устаревшие ответы отбрасываются им же.
pub struct ListSession<T: 'static, S: 'static> {
    controller: RwSignal<ListController<T>, LocalStorage>,
    source: StoredValue<S, LocalStorage>,
}

impl<T: 'static, S: 'static> Clone for ListSession<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, S: 'static> Copy for ListSession<T, S> {}

impl<T, S> ListSession<T, S>
where
    T: Clone + 'static,
    S: ListSource<T> + Clone + 'static,
{
    pub fn new(screen: &'static ListScreen, source: S) -> Self {
        Self {
            controller: RwSignal::new_local(ListController::new(screen)),
            source: StoredValue::new_local(source),
        }
    }

    /// Восстановить сохранённый отбор, подписать сохранение, загрузить
    /// первую страницу. При unmount подписки снимаются.
    pub fn mount(self) {
        let screen = self.screen();
        if let Some(form_state) = use_context::<RwSignal<FormStateStore>>() {
            let saved = form_state.with_untracked(|s| s.load::<AppliedQuery>(screen.id));
            self.controller.update_untracked(|c| {
                if let Some(saved) = saved {
                    log::debug!("{}: восстановлен отбор", screen.id);
                    c.restore(saved);
                }
                c.subscribe(move |query| {
                    form_state.update(|s| s.save(screen.id, query));
                });
            });
        }

        let ticket = self.controller.try_update(|c| c.mount()).flatten();
        self.dispatch(ticket);

        let controller = self.controller;
        on_cleanup(move || {
            controller.try_update_untracked(|c| c.teardown());
        });
    }

    pub fn screen(self) -> &'static ListScreen {
        self.controller.with_untracked(|c| c.screen())
    }

    // ---- операции ----

    pub fn set_search(self, term: &str) {
        self.run(|c| c.set_search(term));
    }

    pub fn set_filter_draft(self, key: &str, value: FilterValue) {
        let result = self
            .controller
            .try_update(|c| c.set_filter_draft(key, value))
            .unwrap_or(Ok(()));
        self.log_rejected(result);
    }

    pub fn apply_filters(self) {
        self.run(|c| c.apply_filters());
    }

    pub fn reset_filters(self) {
        self.run(|c| c.reset_filters());
    }

    pub fn set_sort(self, sort: Option<SortSpec>) {
        self.run_checked(|c| c.set_sort(sort));
    }

    pub fn toggle_sort(self, field: &str) {
        self.run_checked(|c| c.toggle_sort(field));
    }

    pub fn set_page(self, page_number: usize) {
        self.run(|c| c.set_page(page_number));
    }

    pub fn set_page_size(self, page_size: usize) {
        self.run_checked(|c| c.set_page_size(page_size));
    }

    pub fn retry(self) {
        self.run(|c| c.retry());
    }

    /// Несколько операций одним запросом
    pub fn batch(self, f: impl FnOnce(&mut ListController<T>)) {
        self.run(|c| c.batch(f));
    }

    // ---- чтение (отслеживаемое) ----

    pub fn items(self) -> Vec<T> {
        self.controller.with(|c| c.items().to_vec())
    }

    pub fn is_loading(self) -> bool {
        self.controller.with(|c| c.is_loading())
    }

    pub fn error(self) -> Option<String> {
        self.controller.with(|c| c.error().map(str::to_string))
    }

    pub fn page_info(self) -> PageInfo {
        self.controller.with(|c| c.page_info())
    }

    pub fn active_filter_count(self) -> usize {
        self.controller.with(|c| c.active_filter_count())
    }

    pub fn draft(self, key: &str) -> Option<FilterValue> {
        self.controller.with(|c| c.draft(key).cloned())
    }

    pub fn search_input(self) -> String {
        self.controller.with(|c| c.search_input().to_string())
    }

    /// Поиск, который реально ушёл в запрос (для подсветки)
    pub fn applied_search(self) -> String {
        self.controller.with(|c| c.applied().search.clone())
    }

    pub fn sort(self) -> Option<SortSpec> {
        self.controller.with(|c| c.sort().cloned())
    }

    pub fn export_request(self) -> QueryRequest {
        self.controller.with_untracked(|c| c.export_request())
    }

    pub fn source(self) -> S {
        self.source.get_value()
    }

    // ---- внутреннее ----

    fn run(self, op: impl FnOnce(&mut ListController<T>) -> Option<FetchTicket>) {
        let ticket = self.controller.try_update(op).flatten();
        self.dispatch(ticket);
    }

    fn run_checked(
        self,
        op: impl FnOnce(&mut ListController<T>) -> Result<Option<FetchTicket>, ListQueryError>,
    ) {
        match self.controller.try_update(op) {
            Some(Ok(ticket)) => self.dispatch(ticket),
            Some(Err(err)) => self.log_rejected(Err(err)),
            None => {}
        }
    }

    fn log_rejected(self, result: Result<(), ListQueryError>) {
        if let Err(err) = result {
            log::warn!("{}: {}", self.screen().id, err);
        }
    }

    fn dispatch(self, ticket: Option<FetchTicket>) {
        let Some(FetchTicket {
            generation,
            request,
        }) = ticket
        else {
            return;
        };
        let screen_id = self.screen().id;
        log::debug!("{}: запрос #{} {:?}", screen_id, generation, request.pairs());

        let source = self.source.get_value();
        let controller = self.controller;
        spawn_local(async move {
            let result = source.fetch(&request).await;
            if let Err(err) = &result {
                log::warn!("{}: запрос #{} завершился ошибкой: {}", screen_id, generation, err);
            }
            let completion = controller.try_update(|c| c.complete(generation, result));
            if completion == Some(Completion::Stale) {
                log::debug!("{}: ответ #{} устарел, отброшен", screen_id, generation);
            }
        });
    }
}
