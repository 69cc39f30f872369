pub mod a001_meter;
pub mod a002_debt_customer;
pub mod a003_debt_entry;
pub mod a004_refund;
pub mod a005_prepaid_transaction;

use crate::shared::list_query::ListScreen;

/// Все списочные экраны back-office
pub fn list_screens() -> [&'static ListScreen; 5] {
    [
        &a001_meter::aggregate::METER_LIST,
        &a002_debt_customer::aggregate::DEBT_CUSTOMER_LIST,
        &a003_debt_entry::aggregate::DEBT_ENTRY_LIST,
        &a004_refund::aggregate::REFUND_LIST,
        &a005_prepaid_transaction::aggregate::PREPAID_TRANSACTION_LIST,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{FilterKind, SearchPolicy};
    use std::collections::HashSet;

    #[test]
    fn test_screen_descriptors_are_consistent() {
        let mut ids = HashSet::new();
        for screen in list_screens() {
            assert!(ids.insert(screen.id), "duplicate screen id {}", screen.id);
            assert!(screen.endpoint.starts_with("/api/"));

            let mut params = HashSet::new();
            for field in screen.filters {
                match field.kind {
                    FilterKind::DateRange {
                        from_param,
                        to_param,
                    } => {
                        assert!(params.insert(from_param), "{}: {}", screen.id, from_param);
                        assert!(params.insert(to_param), "{}: {}", screen.id, to_param);
                    }
                    _ => assert!(params.insert(field.key), "{}: {}", screen.id, field.key),
                }
            }

            assert!(
                screen.sort_key(screen.default_sort_field).is_some(),
                "{}: default sort must be a sort key",
                screen.id
            );
            if let SearchPolicy::Overrides(keys) = screen.search_policy {
                for key in keys {
                    assert!(screen.field(key).is_some(), "{}: {}", screen.id, key);
                }
            }
            assert!(screen.page_size_options.contains(&screen.default_page_size));
        }
    }
}
