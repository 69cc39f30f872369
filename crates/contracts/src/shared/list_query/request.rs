use serde::{Deserialize, Serialize};

use super::filter::{DateBound, FilterKind, FilterValue, FilterValues};
use super::screen::ListScreen;
use super::sort::{SortDirection, SortSpec};

pub const PAGE_NUMBER: &str = "pageNumber";
pub const PAGE_SIZE: &str = "pageSize";
pub const SEARCH: &str = "search";
pub const SORT_BY: &str = "sortBy";
pub const SORT_ORDER: &str = "sortOrder";

/// Номер (с 1) и размер запрашиваемой страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    pub fn offset(&self) -> usize {
        (self.page_number - 1).saturating_mul(self.page_size)
    }
}

/// Плоский набор параметров запроса списка
///
/// Ключ присутствует только если у него непустое значение. Порядок
/// ключей стабильный: pageNumber, pageSize, search, фильтры в порядке
/// описания экрана, sortBy, sortOrder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    params: Vec<(String, String)>,
}

impl QueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет параметр; пустое значение пропускается
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        self.params.push((key.into(), value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Обратная операция для сервера: разбор параметров по описанию экрана.
    /// Некорректные значения отбрасываются так же, как это делает клиент.
    pub fn parse<'a, I>(screen: &ListScreen, pairs: I) -> ParsedQuery
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let pairs: Vec<(&'a str, &'a str)> = pairs.into_iter().collect();
        let lookup = |key: &str| param(&pairs, key);

        let page_number = lookup(PAGE_NUMBER)
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n >= 1);
        let page_size = lookup(PAGE_SIZE)
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n >= 1);
        let search = lookup(SEARCH).map(str::to_string);

        let mut filters = screen.empty_filters();
        for field in screen.filters {
            let value = match field.kind {
                FilterKind::Text => {
                    FilterValue::Text(lookup(field.key).unwrap_or_default().to_string())
                }
                FilterKind::Number { .. } => {
                    FilterValue::number_input(lookup(field.key).unwrap_or_default())
                }
                FilterKind::Boolean => {
                    FilterValue::boolean_input(lookup(field.key).unwrap_or_default())
                }
                FilterKind::DateRange {
                    from_param,
                    to_param,
                } => FilterValue::DateRange {
                    from: lookup(from_param).and_then(DateBound::parse),
                    to: lookup(to_param).and_then(DateBound::parse),
                },
                FilterKind::Enum { options } => FilterValue::Enum(
                    lookup(field.key)
                        .filter(|code| options.iter().any(|o| o.code == *code))
                        .map(str::to_string),
                ),
            };
            filters.insert(field.key, value);
        }

        let sort = lookup(SORT_BY)
            .and_then(|field| screen.sort_key(field))
            .map(|key| {
                let direction = lookup(SORT_ORDER)
                    .and_then(SortDirection::parse)
                    .unwrap_or(SortDirection::Asc);
                SortSpec::new(key.field, direction)
            });

        ParsedQuery {
            page_number,
            page_size,
            search,
            filters,
            sort,
        }
    }
}

fn param<'a>(pairs: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}

/// Параметры запроса, разобранные сервером
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub page_number: Option<usize>,
    pub page_size: Option<usize>,
    pub search: Option<String>,
    pub filters: FilterValues,
    pub sort: Option<SortSpec>,
}

impl ParsedQuery {
    /// Запрос без номера и размера страницы - выгрузка всего набора
    pub fn is_unpaginated(&self) -> bool {
        self.page_number.is_none() && self.page_size.is_none()
    }
}
