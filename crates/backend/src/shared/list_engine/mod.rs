//! Движок списочных endpoint'ов: отбор, поиск, сортировка, пагинация
//! над набором записей в памяти по описанию экрана [`ListScreen`].

mod record;

pub use record::{FieldValue, ListRecord};

use contracts::shared::list_query::{
    FilterField, FilterKind, FilterValue, ListResult, ListScreen, NumberBound, PageRequest,
    ParsedQuery, QueryRequest, SortDirection,
};

/// Верхняя граница размера страницы
pub const MAX_PAGE_SIZE: usize = 500;

/// Разбор параметров строки запроса по описанию экрана
pub fn parse_params(screen: &ListScreen, params: &[(String, String)]) -> ParsedQuery {
    let query = QueryRequest::parse(
        screen,
        params.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    );
    tracing::debug!("{} query: {:?}", screen.id, query);
    query
}

/// Выполняет разобранный запрос над записями экрана
pub fn run<T: ListRecord + Clone>(
    screen: &ListScreen,
    records: &[T],
    query: &ParsedQuery,
) -> ListResult<T> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<&T> = records
        .iter()
        .filter(|record| matches_filters(screen, *record, query, search.is_some()))
        .filter(|record| match &search {
            Some(term) => matches_search(screen, *record, term),
            None => true,
        })
        .collect();

    sort_records(screen, &mut matched, query);

    if query.is_unpaginated() {
        return ListResult::unpaginated(matched.into_iter().cloned().collect());
    }

    let page = PageRequest::new(
        query.page_number.unwrap_or(1),
        query
            .page_size
            .unwrap_or(screen.default_page_size)
            .min(MAX_PAGE_SIZE),
    );
    let total_count = matched.len();
    let items: Vec<T> = matched
        .into_iter()
        .skip(page.offset())
        .take(page.page_size)
        .cloned()
        .collect();

    ListResult::page(items, total_count, page)
}

fn matches_filters<T: ListRecord>(
    screen: &ListScreen,
    record: &T,
    query: &ParsedQuery,
    search_active: bool,
) -> bool {
    screen.filters.iter().all(|field| {
        if search_active && screen.search_policy.suppresses(field.key) {
            return true;
        }
        match query.filters.get(field.key) {
            Some(value) if !value.is_empty() => matches_field(field, record, value),
            _ => true,
        }
    })
}

fn matches_field<T: ListRecord>(field: &FilterField, record: &T, value: &FilterValue) -> bool {
    let Some(actual) = record.field(field.column) else {
        tracing::warn!("Unknown column '{}' for filter '{}'", field.column, field.key);
        return false;
    };

    match (value, field.kind, actual) {
        (FilterValue::Text(needle), FilterKind::Text, FieldValue::Text(text)) => text
            .to_lowercase()
            .contains(&needle.trim().to_lowercase()),
        (FilterValue::Enum(Some(code)), FilterKind::Enum { .. }, FieldValue::Text(text)) => {
            text == code.trim()
        }
        (FilterValue::Boolean(Some(expected)), FilterKind::Boolean, FieldValue::Bool(flag)) => {
            flag == *expected
        }
        (FilterValue::Number(Some(limit)), FilterKind::Number { bound }, FieldValue::Number(n)) => {
            match bound {
                NumberBound::AtLeast => n >= *limit,
                NumberBound::AtMost => n <= *limit,
                NumberBound::Exact => (n - limit).abs() < f64::EPSILON,
            }
        }
        (FilterValue::DateRange { from, to }, FilterKind::DateRange { .. }, FieldValue::Time(at)) => {
            let Some(at) = at else {
                return false;
            };
            from.map_or(true, |from| at >= from.range_start())
                && to.map_or(true, |to| at <= to.range_end())
        }
        _ => false,
    }
}

fn matches_search<T: ListRecord>(screen: &ListScreen, record: &T, term: &str) -> bool {
    screen.search_columns.iter().any(|column| {
        record
            .field(column)
            .and_then(|value| value.as_text())
            .is_some_and(|text| text.to_lowercase().contains(term))
    })
}

fn sort_records<T: ListRecord>(screen: &ListScreen, records: &mut [&T], query: &ParsedQuery) {
    let spec = query.sort.clone().unwrap_or_else(|| screen.default_sort());
    let Some(key) = screen
        .sort_key(&spec.field)
        .or_else(|| screen.sort_key(screen.default_sort_field))
    else {
        return;
    };

    // sort_by стабилен: равные записи сохраняют исходный порядок
    records.sort_by(|a, b| {
        let ordering = match (a.field(key.column), b.field(key.column)) {
            (Some(a), Some(b)) => a.compare(&b),
            _ => std::cmp::Ordering::Equal,
        };
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use contracts::shared::list_query::{
        EnumOption, SearchPolicy, SortKey, PAGE_NUMBER, PAGE_SIZE,
    };

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        number: &'static str,
        owner: &'static str,
        kind: &'static str,
        active: bool,
        amount: f64,
        at: Option<DateTime<Utc>>,
    }

    impl ListRecord for Row {
        fn field(&self, column: &str) -> Option<FieldValue<'_>> {
            Some(match column {
                "number" => FieldValue::Text(self.number),
                "owner" => FieldValue::Text(self.owner),
                "kind" => FieldValue::Text(self.kind),
                "active" => FieldValue::Bool(self.active),
                "amount" => FieldValue::Number(self.amount),
                "at" => FieldValue::optional_time(self.at.as_ref()),
                _ => return None,
            })
        }
    }

    const KINDS: &[EnumOption] = &[
        EnumOption { code: "a", label: "A" },
        EnumOption { code: "b", label: "B" },
    ];

    const FILTERS: &[FilterField] = &[
        FilterField::text("number", "number", "Номер"),
        FilterField::choice("kind", "kind", "Вид", KINDS),
        FilterField::boolean("active", "active", "Активен"),
        FilterField::number("minAmount", "amount", "Сумма от", NumberBound::AtLeast),
        FilterField::number("maxAmount", "amount", "Сумма до", NumberBound::AtMost),
        FilterField::date_range("period", "at", "Период", "fromUtc", "toUtc"),
    ];

    const SORT_KEYS: &[SortKey] = &[
        SortKey { field: "amount", column: "amount", label: "Сумма" },
        SortKey { field: "owner", column: "owner", label: "Владелец" },
        SortKey { field: "at", column: "at", label: "Дата" },
    ];

    static SCREEN: ListScreen = ListScreen {
        id: "test_rows",
        title: "Строки",
        endpoint: "/api/rows",
        filters: FILTERS,
        sort_keys: SORT_KEYS,
        default_sort_field: "amount",
        default_sort_direction: SortDirection::Desc,
        search_policy: SearchPolicy::Overrides(&["number"]),
        search_columns: &["number", "owner"],
        default_page_size: 2,
        page_size_options: &[2, 10],
    };

    fn day(d: u32) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(2024, 1, d, 12, 0, 0).single()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { number: "M-001", owner: "Иванов", kind: "a", active: true, amount: 100.0, at: day(1) },
            Row { number: "M-002", owner: "Петров", kind: "b", active: false, amount: 250.0, at: day(2) },
            Row { number: "M-003", owner: "Сидоров", kind: "a", active: true, amount: 50.0, at: None },
            Row { number: "X-004", owner: "иванова", kind: "b", active: true, amount: 400.0, at: day(3) },
            Row { number: "X-005", owner: "Кузнецов", kind: "a", active: false, amount: 250.0, at: day(5) },
        ]
    }

    fn query(pairs: &[(&str, &str)]) -> ParsedQuery {
        QueryRequest::parse(&SCREEN, pairs.iter().copied())
    }

    fn numbers(result: &ListResult<Row>) -> Vec<&'static str> {
        result.items.iter().map(|r| r.number).collect()
    }

    #[test]
    fn test_default_sort_and_page_size() {
        let result = run(&SCREEN, &rows(), &query(&[(PAGE_NUMBER, "1")]));
        assert_eq!(numbers(&result), vec!["X-004", "M-002"]);
        assert_eq!(result.page_size, 2);
        assert_eq!(result.total_count, 5);
        assert_eq!(result.total_pages, 3);
        assert!(result.has_next);
    }

    #[test]
    fn test_stable_sort_keeps_source_order_for_ties() {
        let result = run(
            &SCREEN,
            &rows(),
            &query(&[(PAGE_SIZE, "10"), ("sortBy", "amount"), ("sortOrder", "asc")]),
        );
        assert_eq!(numbers(&result), vec!["M-003", "M-001", "M-002", "X-005", "X-004"]);
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_default() {
        let result = run(&SCREEN, &rows(), &query(&[(PAGE_SIZE, "10"), ("sortBy", "secret")]));
        assert_eq!(result.items[0].number, "X-004");
    }

    #[test]
    fn test_missing_dates_sort_last() {
        let result = run(
            &SCREEN,
            &rows(),
            &query(&[(PAGE_SIZE, "10"), ("sortBy", "at"), ("sortOrder", "asc")]),
        );
        assert_eq!(numbers(&result).last(), Some(&"M-003"));
    }

    #[test]
    fn test_filters_combine() {
        let result = run(
            &SCREEN,
            &rows(),
            &query(&[(PAGE_SIZE, "10"), ("kind", "a"), ("active", "true"), ("minAmount", "60")]),
        );
        assert_eq!(numbers(&result), vec!["M-001"]);
    }

    #[test]
    fn test_number_range() {
        let result = run(
            &SCREEN,
            &rows(),
            &query(&[(PAGE_SIZE, "10"), ("minAmount", "100"), ("maxAmount", "250")]),
        );
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn test_date_range_inclusive_and_skips_empty_dates() {
        let result = run(
            &SCREEN,
            &rows(),
            &query(&[
                (PAGE_SIZE, "10"),
                ("fromUtc", "2024-01-02T00:00:00.000"),
                ("toUtc", "2024-01-03T23:59:59.999"),
            ]),
        );
        let mut found = numbers(&result);
        found.sort();
        assert_eq!(found, vec!["M-002", "X-004"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_overrides_number_filter() {
        let result = run(
            &SCREEN,
            &rows(),
            &query(&[(PAGE_SIZE, "10"), ("search", "ИВАН"), ("number", "M-")]),
        );
        let mut found = numbers(&result);
        found.sort();
        assert_eq!(found, vec!["M-001", "X-004"]);
    }

    #[test]
    fn test_text_filter_substring() {
        let result = run(&SCREEN, &rows(), &query(&[(PAGE_SIZE, "10"), ("number", "x-")]));
        assert_eq!(result.total_count, 2);
    }

    #[test]
    fn test_page_size_capped() {
        let result = run(&SCREEN, &rows(), &query(&[(PAGE_SIZE, "100000")]));
        assert_eq!(result.page_size, MAX_PAGE_SIZE);
        assert_eq!(result.items.len(), 5);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let result = run(&SCREEN, &rows(), &query(&[(PAGE_NUMBER, "9"), (PAGE_SIZE, "2")]));
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 5);
        assert_eq!(result.current_page, 9);
        assert!(!result.has_next);
    }

    #[test]
    fn test_parse_params_from_owned_pairs() {
        let params = vec![
            ("pageNumber".to_string(), "2".to_string()),
            ("kind".to_string(), "a".to_string()),
        ];
        let parsed = parse_params(&SCREEN, &params);
        assert_eq!(parsed.page_number, Some(2));
        assert_eq!(parsed.filters.active_count(), 1);
    }

    #[test]
    fn test_no_page_keys_returns_everything() {
        let result = run(&SCREEN, &rows(), &query(&[("kind", "b")]));
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.total_pages, 1);
        assert!(!result.has_next);
    }
}
