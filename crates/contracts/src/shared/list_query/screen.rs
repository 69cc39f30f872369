use super::filter::{FilterField, FilterValues};
use super::search::SearchPolicy;
use super::sort::{SortDirection, SortKey, SortSpec};

/// Статическое описание списочного экрана
///
/// Одно описание используется и клиентом (построение запроса, форма
/// фильтров), и сервером (разбор параметров, применение фильтров).
#[derive(Debug)]
pub struct ListScreen {
    pub id: &'static str,
    pub title: &'static str,
    /// Путь списочного endpoint'а, например "/api/meters"
    pub endpoint: &'static str,
    pub filters: &'static [FilterField],
    pub sort_keys: &'static [SortKey],
    /// Порядок по умолчанию на сервере, если `sortBy` не передан
    pub default_sort_field: &'static str,
    pub default_sort_direction: SortDirection,
    pub search_policy: SearchPolicy,
    /// Поля записи, по которым сервер ищет подстроку
    pub search_columns: &'static [&'static str],
    pub default_page_size: usize,
    pub page_size_options: &'static [usize],
}

impl ListScreen {
    pub fn field(&self, key: &str) -> Option<&'static FilterField> {
        self.filters.iter().find(|f| f.key == key)
    }

    pub fn sort_key(&self, field: &str) -> Option<&'static SortKey> {
        self.sort_keys.iter().find(|k| k.field == field)
    }

    pub fn default_sort(&self) -> SortSpec {
        SortSpec::new(self.default_sort_field, self.default_sort_direction)
    }

    pub fn empty_filters(&self) -> FilterValues {
        FilterValues::empty_for(self.filters)
    }
}
