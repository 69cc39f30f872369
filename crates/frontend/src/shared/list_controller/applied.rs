use std::fmt;

use contracts::shared::list_query::{AppliedQuery, FilterValues, ListScreen, SortSpec};

pub type SubscriptionId = u64;

type Subscriber = Box<dyn FnMut(&AppliedQuery)>;

/// Применённый отбор экрана. Только он попадает в запрос к серверу.
///
/// Подписчики получают уведомление один раз на каждое изменение; внутри
/// `batch` уведомления откладываются и сливаются в одно.
pub struct AppliedQueryStore {
    screen: &'static ListScreen,
    query: AppliedQuery,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: SubscriptionId,
    revision: u64,
    batch_depth: usize,
    dirty: bool,
}

impl fmt::Debug for AppliedQueryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppliedQueryStore")
            .field("screen", &self.screen.id)
            .field("query", &self.query)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl AppliedQueryStore {
    pub fn new(screen: &'static ListScreen) -> Self {
        Self {
            screen,
            query: AppliedQuery::for_screen(screen),
            subscribers: Vec::new(),
            next_id: 1,
            revision: 0,
            batch_depth: 0,
            dirty: false,
        }
    }

    pub fn query(&self) -> &AppliedQuery {
        &self.query
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Копирует черновик целиком; уведомление всегда ровно одно
    pub fn apply(&mut self, drafts: FilterValues) {
        self.query.filters = drafts;
        self.changed();
    }

    /// Сбрасывает фильтры, поиск и сортировку
    pub fn clear(&mut self) {
        self.query = AppliedQuery::for_screen(self.screen);
        self.changed();
    }

    /// Возвращает true, если значение поиска изменилось
    pub fn set_search(&mut self, term: &str) -> bool {
        if self.query.search == term {
            return false;
        }
        self.query.search = term.to_string();
        self.changed();
        true
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) -> bool {
        if self.query.sort == sort {
            return false;
        }
        self.query.sort = sort;
        self.changed();
        true
    }

    /// Подмена состояния без уведомления (восстановление после remount)
    pub fn restore(&mut self, query: AppliedQuery) {
        self.query = query;
    }

    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_batch();
        let result = f(self);
        self.end_batch();
        result
    }

    pub(crate) fn begin_batch(&mut self) {
        self.batch_depth += 1;
    }

    pub(crate) fn end_batch(&mut self) {
        self.batch_depth = self.batch_depth.saturating_sub(1);
        if self.batch_depth == 0 && self.dirty {
            self.notify();
        }
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppliedQuery) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Отписать всех (unmount экрана)
    pub fn release_all(&mut self) {
        self.subscribers.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn changed(&mut self) {
        if self.batch_depth > 0 {
            self.dirty = true;
        } else {
            self.notify();
        }
    }

    fn notify(&mut self) {
        self.dirty = false;
        self.revision += 1;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.query);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use contracts::domain::a004_refund::aggregate::REFUND_LIST;
    use contracts::shared::list_query::FilterValue;

    fn counting_store() -> (AppliedQueryStore, Rc<RefCell<usize>>) {
        let mut store = AppliedQueryStore::new(&REFUND_LIST);
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        store.subscribe(move |_| *counter.borrow_mut() += 1);
        (store, calls)
    }

    #[test]
    fn test_apply_notifies_exactly_once() {
        let (mut store, calls) = counting_store();
        let mut drafts = REFUND_LIST.empty_filters();
        drafts.insert("status", FilterValue::enum_input("pending"));
        drafts.insert("minAmount", FilterValue::number_input("100"));

        store.apply(drafts.clone());
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.revision(), 1);
        assert_eq!(store.query().filters, drafts);
    }

    #[test]
    fn test_unchanged_search_and_sort_are_silent() {
        let (mut store, calls) = counting_store();
        assert!(!store.set_search(""));
        assert!(!store.set_sort(None));
        assert_eq!(*calls.borrow(), 0);

        assert!(store.set_sort(Some(SortSpec::asc("amount"))));
        assert!(!store.set_sort(Some(SortSpec::asc("amount"))));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_batch_coalesces_notifications() {
        let (mut store, calls) = counting_store();
        store.batch(|s| {
            s.set_search("Петров");
            s.set_sort(Some(SortSpec::desc("amount")));
            s.apply(REFUND_LIST.empty_filters());
        });
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.revision(), 1);

        // пустой batch ничего не рассылает
        store.batch(|_| {});
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe_and_release() {
        let mut store = AppliedQueryStore::new(&REFUND_LIST);
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);
        store.subscribe(|_| {});

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.clear();
        assert_eq!(*calls.borrow(), 0);

        store.release_all();
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_restore_is_silent() {
        let (mut store, calls) = counting_store();
        let mut query = AppliedQuery::for_screen(&REFUND_LIST);
        query.search = "REF-1".into();
        store.restore(query.clone());
        assert_eq!(store.query(), &query);
        assert_eq!(*calls.borrow(), 0);
    }
}
