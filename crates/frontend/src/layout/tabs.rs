//! Реестр вкладок: ключ вкладки (id экрана) -> View

use contracts::domain::list_screens;
use contracts::shared::list_query::ListScreen;
use leptos::prelude::*;

use crate::domain::a001_meter::ui::list::MeterList;
use crate::domain::a002_debt_customer::ui::list::DebtCustomerList;
use crate::domain::a003_debt_entry::ui::list::DebtEntryList;
use crate::domain::a004_refund::ui::list::RefundList;
use crate::domain::a005_prepaid_transaction::ui::list::PrepaidTransactionList;

/// Иконка вкладки
pub fn tab_icon(key: &str) -> &'static str {
    match key {
        "a001_meter" => "meters",
        "a002_debt_customer" => "customers",
        "a003_debt_entry" => "invoices",
        "a004_refund" => "refunds",
        "a005_prepaid_transaction" => "payments",
        _ => "",
    }
}

/// Экраны в порядке вкладок
pub fn tab_screens() -> [&'static ListScreen; 5] {
    list_screens()
}

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_meter" => view! { <MeterList /> }.into_any(),
        "a002_debt_customer" => view! { <DebtCustomerList /> }.into_any(),
        "a003_debt_entry" => view! { <DebtEntryList /> }.into_any(),
        "a004_refund" => view! { <RefundList /> }.into_any(),
        "a005_prepaid_transaction" => view! { <PrepaidTransactionList /> }.into_any(),
        _ => {
            log::warn!("Неизвестная вкладка: {}", key);
            view! { <div class="alert alert--error">"Экран не найден: " {key.to_string()}</div> }
                .into_any()
        }
    }
}
