use contracts::shared::list_query::{
    build, build_export, AppliedQuery, FilterValue, FilterValues, ListQueryError, ListResult,
    ListScreen, QueryRequest, SearchInput, SortSpec,
};

use super::applied::{AppliedQueryStore, SubscriptionId};
use super::draft::FilterDraftStore;
use super::pagination::{PageInfo, PaginationController};
use super::source::FetchError;

/// Запрос, который нужно отправить; ответ возвращается в
/// [`ListController::complete`] вместе с тем же поколением
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub request: QueryRequest,
}

/// Результат обработки ответа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// Ответ на устаревший запрос, отброшен
    Stale,
}

/// То, что отображает экран списка
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<'a, T> {
    pub items: &'a [T],
    pub loading: bool,
    pub error: Option<&'a str>,
    pub pagination: PageInfo,
}

/// Контроллер списочного экрана.
///
/// Сводит поиск, черновик и применённые фильтры, сортировку и пагинацию в
/// один запрос. Сам ничего не отправляет: операции, после которых нужен
/// запрос, возвращают [`FetchTicket`].
pub struct ListController<T> {
    screen: &'static ListScreen,
    drafts: FilterDraftStore,
    applied: AppliedQueryStore,
    pagination: PaginationController,
    search_input: String,
    items: Vec<T>,
    batch_depth: usize,
    fetch_requested: bool,
}

impl<T> ListController<T> {
    pub fn new(screen: &'static ListScreen) -> Self {
        Self {
            screen,
            drafts: FilterDraftStore::new(screen),
            applied: AppliedQueryStore::new(screen),
            pagination: PaginationController::new(screen.default_page_size),
            search_input: String::new(),
            items: Vec::new(),
            batch_depth: 0,
            fetch_requested: false,
        }
    }

    pub fn screen(&self) -> &'static ListScreen {
        self.screen
    }

    // ---- операции ----

    /// Первая загрузка экрана
    pub fn mount(&mut self) -> Option<FetchTicket> {
        self.request_fetch();
        self.flush()
    }

    /// Пустая строка или от 3 символов применяется сразу, 1-2 символа
    /// только запоминаются
    pub fn set_search(&mut self, term: &str) -> Option<FetchTicket> {
        self.search_input = term.to_string();
        let input = SearchInput::classify(term);
        let Some(committed) = input.committed() else {
            return None;
        };
        if self.applied.set_search(committed) {
            self.criteria_changed();
        }
        self.flush()
    }

    pub fn set_filter_draft(&mut self, key: &str, value: FilterValue) -> Result<(), ListQueryError> {
        self.drafts.set(key, value)
    }

    pub fn apply_filters(&mut self) -> Option<FetchTicket> {
        self.applied.apply(self.drafts.snapshot());
        self.criteria_changed();
        self.flush()
    }

    pub fn reset_filters(&mut self) -> Option<FetchTicket> {
        self.drafts.reset();
        self.search_input.clear();
        self.applied.clear();
        self.criteria_changed();
        self.flush()
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) -> Result<Option<FetchTicket>, ListQueryError> {
        if let Some(spec) = &sort {
            if self.screen.sort_key(&spec.field).is_none() {
                return Err(ListQueryError::UnknownSortKey(spec.field.clone()));
            }
        }
        if self.applied.set_sort(sort) {
            self.criteria_changed();
        }
        Ok(self.flush())
    }

    /// Клик по заголовку колонки: asc -> desc -> asc, новая колонка с asc
    pub fn toggle_sort(&mut self, field: &str) -> Result<Option<FetchTicket>, ListQueryError> {
        let next = SortSpec::toggle(self.sort(), field);
        self.set_sort(Some(next))
    }

    pub fn set_page(&mut self, page_number: usize) -> Option<FetchTicket> {
        if self.pagination.set_page(page_number) {
            self.request_fetch();
        }
        self.flush()
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<Option<FetchTicket>, ListQueryError> {
        if self.pagination.set_page_size(page_size)? {
            self.request_fetch();
        }
        Ok(self.flush())
    }

    /// Повтор текущего запроса без изменений
    pub fn retry(&mut self) -> Option<FetchTicket> {
        self.request_fetch();
        self.flush()
    }

    /// Операции внутри `f` дают не больше одного запроса
    pub fn batch(&mut self, f: impl FnOnce(&mut Self)) -> Option<FetchTicket> {
        self.batch_depth += 1;
        self.applied.begin_batch();
        f(self);
        self.applied.end_batch();
        self.batch_depth -= 1;
        self.flush()
    }

    /// Ответ на запрос с поколением `generation`
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<ListResult<T>, FetchError>,
    ) -> Completion {
        match result {
            Ok(result) => {
                if !self.pagination.succeeded(generation, result.meta()) {
                    return Completion::Stale;
                }
                self.items = result.items;
            }
            Err(err) => {
                // строки прошлой успешной загрузки остаются на экране
                if !self.pagination.failed(generation, err.to_string()) {
                    return Completion::Stale;
                }
            }
        }
        Completion::Applied
    }

    /// Подставить сохранённый отбор (до `mount`)
    pub fn restore(&mut self, query: AppliedQuery) {
        self.drafts.load(&query.filters);
        self.search_input = query.search.clone();
        self.applied.restore(query);
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppliedQuery) + 'static) -> SubscriptionId {
        self.applied.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.applied.unsubscribe(id)
    }

    pub fn teardown(&mut self) {
        self.applied.release_all();
    }

    // ---- чтение ----

    pub fn snapshot(&self) -> ListSnapshot<'_, T> {
        ListSnapshot {
            items: &self.items,
            loading: self.pagination.is_loading(),
            error: self.pagination.error(),
            pagination: self.pagination.info(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.pagination.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.pagination.error()
    }

    pub fn page_info(&self) -> PageInfo {
        self.pagination.info()
    }

    /// Заполненные поля черновика (бейдж панели фильтров)
    pub fn active_filter_count(&self) -> usize {
        self.drafts.active_count()
    }

    pub fn applied_filter_count(&self) -> usize {
        self.applied.query().filters.active_count()
    }

    pub fn draft(&self, key: &str) -> Option<&FilterValue> {
        self.drafts.get(key)
    }

    pub fn drafts(&self) -> &FilterValues {
        self.drafts.values()
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn applied(&self) -> &AppliedQuery {
        self.applied.query()
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.applied.query().sort.as_ref()
    }

    pub fn current_request(&self) -> QueryRequest {
        build(self.screen, self.applied.query(), self.pagination.page_request())
    }

    /// Те же критерии без пагинации, для выгрузки
    pub fn export_request(&self) -> QueryRequest {
        build_export(self.screen, self.applied.query())
    }

    // ---- внутреннее ----

    fn criteria_changed(&mut self) {
        self.pagination.query_changed();
        self.request_fetch();
    }

    fn request_fetch(&mut self) {
        self.fetch_requested = true;
    }

    fn flush(&mut self) -> Option<FetchTicket> {
        if self.batch_depth > 0 || !self.fetch_requested {
            return None;
        }
        self.fetch_requested = false;
        let request = self.current_request();
        let generation = self.pagination.begin();
        Some(FetchTicket { generation, request })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use contracts::domain::a002_debt_customer::aggregate::DEBT_CUSTOMER_LIST;
    use contracts::shared::list_query::PageRequest;

    type Controller = ListController<String>;

    fn controller() -> Controller {
        ListController::new(&DEBT_CUSTOMER_LIST)
    }

    fn page(items: &[&str], total_count: usize, page_number: usize) -> ListResult<String> {
        ListResult::page(
            items.iter().map(|s| s.to_string()).collect(),
            total_count,
            PageRequest::new(page_number, 50),
        )
    }

    /// Смонтированный контроллер с загруженной первой страницей из трёх
    fn loaded() -> Controller {
        let mut c = controller();
        let ticket = c.mount().unwrap();
        assert_eq!(c.complete(ticket.generation, Ok(page(&["a"], 150, 1))), Completion::Applied);
        c
    }

    fn keys(request: &QueryRequest) -> Vec<&str> {
        request.keys().collect()
    }

    #[test]
    fn test_mount_requests_first_page() {
        let mut c = controller();
        assert!(!c.is_loading());
        let ticket = c.mount().unwrap();
        assert_eq!(ticket.generation, 1);
        assert_eq!(keys(&ticket.request), vec!["pageNumber", "pageSize"]);
        assert_eq!(ticket.request.get("pageSize"), Some("50"));
        assert!(c.is_loading());
    }

    #[test]
    fn test_draft_edits_never_fetch() {
        let mut c = loaded();
        c.set_filter_draft("minDebt", FilterValue::number_input("5000")).unwrap();
        c.set_filter_draft("status", FilterValue::enum_input("2")).unwrap();
        assert_eq!(c.active_filter_count(), 2);
        assert_eq!(c.applied_filter_count(), 0);
        assert!(!c.current_request().contains("minDebt"));
        assert!(!c.is_loading());
    }

    #[test]
    fn test_only_last_apply_snapshot_counts() {
        let mut c = loaded();
        c.set_filter_draft("minDebt", FilterValue::number_input("100")).unwrap();
        c.apply_filters().unwrap();
        c.set_filter_draft("minDebt", FilterValue::number_input("200")).unwrap();
        c.set_filter_draft("minDebt", FilterValue::number_input("300")).unwrap();
        // черновик изменился, а запрос - нет
        assert_eq!(c.current_request().get("minDebt"), Some("100"));

        let ticket = c.apply_filters().unwrap();
        assert_eq!(ticket.request.get("minDebt"), Some("300"));
    }

    #[test]
    fn test_apply_then_reset_gives_initial_request() {
        let mut c = controller();
        let initial = c.mount().unwrap().request;

        c.set_filter_draft("status", FilterValue::enum_input("2")).unwrap();
        c.set_filter_draft("minDebt", FilterValue::number_input("5000")).unwrap();
        let applied = c.apply_filters().unwrap();
        assert_eq!(applied.request.get("status"), Some("2"));
        assert_eq!(applied.request.get("minDebt"), Some("5000"));

        let reset = c.reset_filters().unwrap();
        assert_eq!(reset.request, initial);
        assert_eq!(c.active_filter_count(), 0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut c = loaded();
        c.set_search("Иванов");
        c.toggle_sort("totalDebt").unwrap();

        let first = c.reset_filters().unwrap();
        let state = (c.applied().clone(), c.drafts().clone(), c.search_input().to_string());
        let second = c.reset_filters().unwrap();
        assert_eq!(first.request, second.request);
        assert_eq!(
            state,
            (c.applied().clone(), c.drafts().clone(), c.search_input().to_string())
        );
    }

    #[test]
    fn test_criteria_change_resets_page() {
        let mut c = loaded();
        let ticket = c.set_page(3).unwrap();
        assert_eq!(ticket.request.get("pageNumber"), Some("3"));
        c.complete(ticket.generation, Ok(page(&["c"], 150, 3)));

        let ticket = c.set_search("Петров").unwrap();
        assert_eq!(ticket.request.get("pageNumber"), Some("1"));
        c.complete(ticket.generation, Ok(page(&["a"], 150, 1)));

        let ticket = c.set_page(2).unwrap();
        c.complete(ticket.generation, Ok(page(&["b"], 150, 2)));
        let ticket = c.toggle_sort("totalDebt").unwrap().unwrap();
        assert_eq!(ticket.request.get("pageNumber"), Some("1"));
        c.complete(ticket.generation, Ok(page(&["a"], 150, 1)));

        let ticket = c.set_page(2).unwrap();
        c.complete(ticket.generation, Ok(page(&["b"], 150, 2)));
        let ticket = c.apply_filters().unwrap();
        assert_eq!(ticket.request.get("pageNumber"), Some("1"));
        c.complete(ticket.generation, Ok(page(&["a"], 150, 1)));

        let ticket = c.set_page(2).unwrap();
        c.complete(ticket.generation, Ok(page(&["b"], 150, 2)));
        let ticket = c.set_page_size(100).unwrap().unwrap();
        assert_eq!(ticket.request.get("pageNumber"), Some("1"));
        assert_eq!(ticket.request.get("pageSize"), Some("100"));
    }

    #[test]
    fn test_set_page_waits_for_new_totals() {
        let mut c = loaded();
        c.set_filter_draft("status", FilterValue::enum_input("2")).unwrap();
        let ticket = c.apply_filters().unwrap();

        // три страницы были у прежнего отбора
        assert_eq!(c.set_page(3), None);
        assert_eq!(c.complete(ticket.generation, Ok(page(&["x"], 1, 1))), Completion::Applied);

        let info = c.page_info();
        assert_eq!((info.page_number, info.total_count, info.total_pages), (1, 1, 1));
        assert_eq!(c.items(), ["x".to_string()]);
        assert_eq!(c.set_page(3), None);
    }

    #[test]
    fn test_failed_page_keeps_pager_on_loaded_page() {
        let mut c = loaded();
        let ticket = c.set_page(2).unwrap();
        c.complete(ticket.generation, Err(FetchError::Network("offline".into())));

        assert_eq!(c.items(), ["a".to_string()]);
        assert_eq!(c.page_info().page_number, 1);

        let again = c.set_page(2).unwrap();
        assert_eq!(again.request, ticket.request);
    }

    #[test]
    fn test_set_page_out_of_range_or_same_is_noop() {
        let mut c = loaded();
        assert_eq!(c.set_page(1), None);
        assert_eq!(c.set_page(0), None);
        assert_eq!(c.set_page(4), None);
        assert!(!c.is_loading());
        assert_eq!(c.set_page_size(50), Ok(None));
        assert_eq!(c.set_page_size(0), Err(ListQueryError::InvalidPageSize(0)));
    }

    #[test]
    fn test_search_threshold() {
        let mut c = loaded();
        assert_eq!(c.set_search("ab"), None);
        assert_eq!(c.search_input(), "ab");

        let ticket = c.set_search("abc").unwrap();
        assert_eq!(ticket.request.get("search"), Some("abc"));

        let ticket = c.set_search("").unwrap();
        assert!(!ticket.request.contains("search"));

        // повторная очистка ничего не меняет
        assert_eq!(c.set_search("  "), None);
    }

    #[test]
    fn test_search_overrides_account_filter() {
        let mut c = loaded();
        c.set_filter_draft("accountNumber", FilterValue::Text("AC-7".into())).unwrap();
        let ticket = c.apply_filters().unwrap();
        assert_eq!(ticket.request.get("accountNumber"), Some("AC-7"));

        let ticket = c.set_search("Сидоров").unwrap();
        assert!(!ticket.request.contains("accountNumber"));
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut c = controller();
        let g1 = c.mount().unwrap().generation;
        let g2 = c.set_search("Петров").unwrap().generation;
        assert!(g1 < g2);

        assert_eq!(c.complete(g2, Ok(page(&["new"], 1, 1))), Completion::Applied);
        assert_eq!(c.complete(g1, Ok(page(&["old"], 1, 1))), Completion::Stale);
        assert_eq!(c.items(), ["new".to_string()]);

        // поздняя ошибка старого запроса тоже игнорируется
        assert_eq!(c.complete(g1, Err(FetchError::Network("reset".into()))), Completion::Stale);
        assert_eq!(c.error(), None);
    }

    #[test]
    fn test_stale_while_error_and_retry() {
        let mut c = loaded();
        let ticket = c.set_page(2).unwrap();
        let failure = FetchError::Server {
            status: 500,
            message: "db down".into(),
        };
        assert_eq!(c.complete(ticket.generation, Err(failure)), Completion::Applied);

        let snapshot = c.snapshot();
        assert_eq!(snapshot.items, ["a".to_string()]);
        assert_eq!(snapshot.error, Some("Ошибка сервера (500): db down"));
        assert!(!snapshot.loading);
        assert_eq!(snapshot.pagination.total_count, 150);

        let retry = c.retry().unwrap();
        assert_eq!(retry.request, ticket.request);
        assert!(retry.generation > ticket.generation);
        assert!(c.is_loading());
    }

    #[test]
    fn test_set_page_while_loading_supersedes() {
        let mut c = loaded();
        let first = c.set_page(2).unwrap();
        let second = c.set_page(3).unwrap();
        assert_eq!(c.complete(first.generation, Ok(page(&["b"], 150, 2))), Completion::Stale);
        assert_eq!(c.complete(second.generation, Ok(page(&["c"], 150, 3))), Completion::Applied);
        assert_eq!(c.page_info().page_number, 3);
    }

    #[test]
    fn test_unknown_sort_key_rejected() {
        let mut c = loaded();
        assert_eq!(
            c.set_sort(Some(SortSpec::asc("password"))),
            Err(ListQueryError::UnknownSortKey("password".into()))
        );
        assert_eq!(c.sort(), None);
        assert!(!c.is_loading());
    }

    #[test]
    fn test_toggle_sort_direction() {
        let mut c = loaded();
        let ticket = c.toggle_sort("totalDebt").unwrap().unwrap();
        assert_eq!(ticket.request.get("sortOrder"), Some("asc"));
        let ticket = c.toggle_sort("totalDebt").unwrap().unwrap();
        assert_eq!(ticket.request.get("sortOrder"), Some("desc"));
        assert_eq!(c.set_sort(Some(SortSpec::desc("totalDebt"))), Ok(None));
    }

    #[test]
    fn test_batch_yields_one_ticket() {
        let mut c = loaded();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        c.subscribe(move |_| *counter.borrow_mut() += 1);

        let ticket = c
            .batch(|c| {
                assert_eq!(c.set_search("Иванов"), None);
                c.set_filter_draft("status", FilterValue::enum_input("3")).unwrap();
                assert_eq!(c.apply_filters(), None);
                assert_eq!(c.toggle_sort("customerName"), Ok(None));
            })
            .unwrap();

        assert_eq!(ticket.request.get("search"), Some("Иванов"));
        assert_eq!(ticket.request.get("status"), Some("3"));
        assert_eq!(ticket.request.get("sortBy"), Some("customerName"));
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(c.batch(|_| {}), None);
    }

    #[test]
    fn test_batched_reset_restores_initial_view() {
        let mut c = controller();
        let initial = c.mount().unwrap();
        c.complete(initial.generation, Ok(page(&["a"], 150, 1)));
        let ticket = c.set_page_size(100).unwrap().unwrap();
        c.complete(ticket.generation, Ok(page(&["a"], 150, 1)));
        c.set_search("Иванов").unwrap();

        let ticket = c
            .batch(|c| {
                assert_eq!(c.reset_filters(), None);
                assert_eq!(c.set_page_size(DEBT_CUSTOMER_LIST.default_page_size), Ok(None));
            })
            .unwrap();
        assert_eq!(ticket.request, initial.request);
        // один запрос на весь сброс
        assert_eq!(ticket.generation, 4);
    }

    #[test]
    fn test_restore_then_mount() {
        let mut source = controller();
        source.set_filter_draft("status", FilterValue::enum_input("2")).unwrap();
        source.apply_filters();
        source.set_search("Кузнецов");
        let saved = source.applied().clone();

        let mut c = controller();
        c.restore(saved);
        assert_eq!(c.active_filter_count(), 1);
        assert_eq!(c.search_input(), "Кузнецов");
        let ticket = c.mount().unwrap();
        assert_eq!(ticket.request.get("status"), Some("2"));
        assert_eq!(ticket.request.get("search"), Some("Кузнецов"));
    }

    #[test]
    fn test_teardown_releases_subscribers() {
        let mut c = loaded();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        c.subscribe(move |_| *counter.borrow_mut() += 1);
        c.teardown();
        c.reset_filters();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_export_request_has_criteria_only() {
        let mut c = loaded();
        c.set_filter_draft("status", FilterValue::enum_input("2")).unwrap();
        c.apply_filters();
        assert_eq!(keys(&c.export_request()), vec!["status"]);
    }
}
