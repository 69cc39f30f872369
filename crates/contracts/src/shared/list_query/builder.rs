use serde::{Deserialize, Serialize};

use super::filter::{FilterField, FilterKind, FilterValue, FilterValues};
use super::request::{PageRequest, QueryRequest, PAGE_NUMBER, PAGE_SIZE, SEARCH, SORT_BY, SORT_ORDER};
use super::screen::ListScreen;
use super::sort::SortSpec;

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Применённые критерии отбора: только они попадают в запрос
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedQuery {
    pub filters: FilterValues,
    pub search: String,
    pub sort: Option<SortSpec>,
}

impl AppliedQuery {
    /// Пустой отбор для экрана: все поля с пустыми значениями
    pub fn for_screen(screen: &ListScreen) -> Self {
        Self {
            filters: screen.empty_filters(),
            search: String::new(),
            sort: None,
        }
    }
}

/// Собирает запрос страницы списка.
///
/// Пустые значения, нечисловой ввод, неизвестные варианты перечислений
/// молча отбрасываются - функция никогда не паникует.
pub fn build(screen: &ListScreen, query: &AppliedQuery, page: PageRequest) -> QueryRequest {
    let mut request = QueryRequest::new();
    request.push(PAGE_NUMBER, page.page_number.max(1).to_string());
    request.push(PAGE_SIZE, page.page_size.max(1).to_string());
    push_criteria(&mut request, screen, query);
    request
}

/// Запрос для выгрузки (CSV): те же критерии, но без пагинации
pub fn build_export(screen: &ListScreen, query: &AppliedQuery) -> QueryRequest {
    let mut request = QueryRequest::new();
    push_criteria(&mut request, screen, query);
    request
}

fn push_criteria(request: &mut QueryRequest, screen: &ListScreen, query: &AppliedQuery) {
    let search = query.search.trim();
    request.push(SEARCH, search);

    for field in screen.filters {
        if !search.is_empty() && screen.search_policy.suppresses(field.key) {
            continue;
        }
        let Some(value) = query.filters.get(field.key) else {
            continue;
        };
        for (key, rendered) in render_filter(field, value) {
            request.push(key, rendered);
        }
    }

    if let Some(sort) = &query.sort {
        if screen.sort_key(&sort.field).is_some() {
            request.push(SORT_BY, sort.field.as_str());
            request.push(SORT_ORDER, sort.direction.as_str());
        }
    }
}

fn render_filter(field: &FilterField, value: &FilterValue) -> Vec<(&'static str, String)> {
    if value.is_empty() || !value.matches_kind(&field.kind) {
        return Vec::new();
    }
    match (value, field.kind) {
        (FilterValue::Text(text), _) => vec![(field.key, text.trim().to_string())],
        (FilterValue::Number(Some(number)), _) => vec![(field.key, number.to_string())],
        (FilterValue::Boolean(Some(flag)), _) => vec![(field.key, flag.to_string())],
        (
            FilterValue::DateRange { from, to },
            FilterKind::DateRange {
                from_param,
                to_param,
            },
        ) => {
            let mut params = Vec::with_capacity(2);
            if let Some(from) = from {
                params.push((from_param, from.range_start().format(DATE_TIME_FORMAT).to_string()));
            }
            if let Some(to) = to {
                params.push((to_param, to.range_end().format(DATE_TIME_FORMAT).to_string()));
            }
            params
        }
        (FilterValue::Enum(Some(code)), FilterKind::Enum { options }) => {
            let code = code.trim();
            if options.iter().any(|o| o.code == code) {
                vec![(field.key, code.to_string())]
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{
        EnumOption, NumberBound, SearchPolicy, SortDirection, SortKey,
    };

    const STATUS_OPTIONS: &[EnumOption] = &[
        EnumOption { code: "1", label: "Текущий" },
        EnumOption { code: "2", label: "Просрочен" },
    ];

    const FILTERS: &[FilterField] = &[
        FilterField::text("accountNumber", "account_number", "Лицевой счёт"),
        FilterField::choice("status", "status", "Статус", STATUS_OPTIONS),
        FilterField::number("minDebt", "total_debt", "Долг от", NumberBound::AtLeast),
        FilterField::boolean("isDisconnected", "is_disconnected", "Отключён"),
        FilterField::date_range("lastPayment", "last_payment_at", "Последняя оплата", "fromUtc", "toUtc"),
    ];

    const SORT_KEYS: &[SortKey] = &[SortKey {
        field: "totalDebt",
        column: "total_debt",
        label: "Долг",
    }];

    static SCREEN: ListScreen = ListScreen {
        id: "test_debts",
        title: "Должники",
        endpoint: "/api/debt-customers",
        filters: FILTERS,
        sort_keys: SORT_KEYS,
        default_sort_field: "totalDebt",
        default_sort_direction: SortDirection::Desc,
        search_policy: SearchPolicy::Overrides(&["accountNumber"]),
        search_columns: &["account_number"],
        default_page_size: 50,
        page_size_options: &[50, 100],
    };

    fn query() -> AppliedQuery {
        AppliedQuery::for_screen(&SCREEN)
    }

    fn keys(request: &QueryRequest) -> Vec<&str> {
        request.keys().collect()
    }

    #[test]
    fn test_empty_filters_build_only_page_keys() {
        let request = build(&SCREEN, &query(), PageRequest::new(1, 50));
        assert_eq!(keys(&request), vec!["pageNumber", "pageSize"]);
        assert_eq!(request.get("pageNumber"), Some("1"));
        assert_eq!(request.get("pageSize"), Some("50"));
    }

    #[test]
    fn test_missing_filter_entries_are_skipped() {
        let request = build(&SCREEN, &AppliedQuery::default(), PageRequest::first(20));
        assert_eq!(keys(&request), vec!["pageNumber", "pageSize"]);
    }

    #[test]
    fn test_values_rendered_in_descriptor_order() {
        let mut q = query();
        q.filters.insert("minDebt", FilterValue::number_input("5000"));
        q.filters.insert("status", FilterValue::enum_input("2"));
        q.filters.insert("isDisconnected", FilterValue::Boolean(Some(false)));
        q.sort = Some(SortSpec::desc("totalDebt"));

        let request = build(&SCREEN, &q, PageRequest::new(3, 50));
        assert_eq!(
            keys(&request),
            vec!["pageNumber", "pageSize", "status", "minDebt", "isDisconnected", "sortBy", "sortOrder"]
        );
        assert_eq!(request.get("minDebt"), Some("5000"));
        assert_eq!(request.get("isDisconnected"), Some("false"));
        assert_eq!(request.get("sortOrder"), Some("desc"));
    }

    #[test]
    fn test_non_numeric_input_is_absent_not_zero() {
        let mut q = query();
        q.filters.insert("minDebt", FilterValue::number_input("lots"));
        let request = build(&SCREEN, &q, PageRequest::first(50));
        assert!(!request.contains("minDebt"));
    }

    #[test]
    fn test_unknown_enum_code_dropped() {
        let mut q = query();
        q.filters.insert("status", FilterValue::enum_input("9"));
        let request = build(&SCREEN, &q, PageRequest::first(50));
        assert!(!request.contains("status"));
    }

    #[test]
    fn test_mismatched_value_kind_dropped() {
        let mut q = query();
        q.filters.insert("minDebt", FilterValue::Text("5000".into()));
        let request = build(&SCREEN, &q, PageRequest::first(50));
        assert!(!request.contains("minDebt"));
    }

    #[test]
    fn test_date_range_day_boundaries() {
        let mut q = query();
        q.filters.insert(
            "lastPayment",
            FilterValue::date_range_input("2024-01-01", "2024-01-01"),
        );
        let request = build(&SCREEN, &q, PageRequest::first(50));
        assert_eq!(request.get("fromUtc"), Some("2024-01-01T00:00:00.000"));
        assert_eq!(request.get("toUtc"), Some("2024-01-01T23:59:59.999"));
    }

    #[test]
    fn test_date_range_single_bound() {
        let mut q = query();
        q.filters.insert("lastPayment", FilterValue::date_range_input("", "2024-03-31"));
        let request = build(&SCREEN, &q, PageRequest::first(50));
        assert!(!request.contains("fromUtc"));
        assert_eq!(request.get("toUtc"), Some("2024-03-31T23:59:59.999"));
    }

    #[test]
    fn test_date_time_bound_kept_verbatim() {
        let mut q = query();
        q.filters.insert(
            "lastPayment",
            FilterValue::date_range_input("2024-01-01T08:15", ""),
        );
        let request = build(&SCREEN, &q, PageRequest::first(50));
        assert_eq!(request.get("fromUtc"), Some("2024-01-01T08:15:00.000"));
    }

    #[test]
    fn test_search_trimmed_and_overrides_reference_filter() {
        let mut q = query();
        q.filters.insert("accountNumber", FilterValue::Text("AC-100".into()));
        q.filters.insert("status", FilterValue::enum_input("1"));
        q.search = "  Иванов ".into();

        let request = build(&SCREEN, &q, PageRequest::first(50));
        assert_eq!(request.get("search"), Some("Иванов"));
        assert!(!request.contains("accountNumber"));
        assert_eq!(request.get("status"), Some("1"));
    }

    #[test]
    fn test_blank_search_keeps_reference_filter() {
        let mut q = query();
        q.filters.insert("accountNumber", FilterValue::Text("AC-100".into()));
        q.search = "   ".into();

        let request = build(&SCREEN, &q, PageRequest::first(50));
        assert!(!request.contains("search"));
        assert_eq!(request.get("accountNumber"), Some("AC-100"));
    }

    #[test]
    fn test_sort_on_unknown_key_is_dropped() {
        let mut q = query();
        q.sort = Some(SortSpec::asc("password"));
        let request = build(&SCREEN, &q, PageRequest::first(50));
        assert!(!request.contains("sortBy"));
        assert!(!request.contains("sortOrder"));
    }

    #[test]
    fn test_export_request_has_no_page_keys() {
        let mut q = query();
        q.filters.insert("status", FilterValue::enum_input("2"));
        let request = build_export(&SCREEN, &q);
        assert_eq!(keys(&request), vec!["status"]);
    }

    #[test]
    fn test_server_parses_what_client_builds() {
        let mut q = query();
        q.filters.insert("status", FilterValue::enum_input("2"));
        q.filters.insert("minDebt", FilterValue::number_input("5000"));
        q.filters.insert("lastPayment", FilterValue::date_range_input("2024-01-01", ""));
        q.sort = Some(SortSpec::desc("totalDebt"));
        let request = build(&SCREEN, &q, PageRequest::new(2, 50));

        let parsed = QueryRequest::parse(
            &SCREEN,
            request.pairs().iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
        assert_eq!(parsed.page_number, Some(2));
        assert_eq!(parsed.page_size, Some(50));
        assert_eq!(parsed.filters.get("status"), Some(&FilterValue::Enum(Some("2".into()))));
        assert_eq!(parsed.filters.get("minDebt"), Some(&FilterValue::Number(Some(5000.0))));
        assert_eq!(parsed.filters.active_count(), 3);
        assert_eq!(parsed.sort, Some(SortSpec::desc("totalDebt")));
    }

    #[test]
    fn test_server_parse_drops_malformed_values() {
        let parsed = QueryRequest::parse(
            &SCREEN,
            [
                ("pageNumber", "0"),
                ("pageSize", "abc"),
                ("minDebt", "много"),
                ("status", "7"),
                ("fromUtc", "yesterday"),
                ("sortBy", "secret"),
            ],
        );
        assert_eq!(parsed.page_number, None);
        assert_eq!(parsed.page_size, None);
        assert!(parsed.is_unpaginated());
        assert_eq!(parsed.filters.active_count(), 0);
        assert_eq!(parsed.sort, None);
    }
}
