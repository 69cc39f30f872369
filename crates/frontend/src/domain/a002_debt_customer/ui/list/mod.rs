use contracts::domain::a002_debt_customer::aggregate::{
    DebtCustomerListItemDto, DEBT_CUSTOMER_LIST,
};
use leptos::prelude::*;

use crate::shared::date_utils::format_optional_datetime;
use crate::shared::list_page::list_page;
use crate::shared::list_row::{ListColumn, ListRow};
use crate::shared::number_format::format_money;

const COLUMNS: &[ListColumn] = &[
    ListColumn::text("Лицевой счёт", 130),
    ListColumn::text("Абонент", 220).sortable("customerName"),
    ListColumn::text("Статус", 120),
    ListColumn::number("Долг", 120).sortable("totalDebt"),
    ListColumn::text("Последняя оплата", 150).sortable("lastPaymentAt"),
];

impl ListRow for DebtCustomerListItemDto {
    fn columns() -> &'static [ListColumn] {
        COLUMNS
    }

    fn row_key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.account_number.clone(),
            self.customer_name.clone(),
            self.status.display_name().to_string(),
            format_money(self.total_debt),
            format_optional_datetime(self.last_payment_at.as_ref()),
        ]
    }
}

#[component]
pub fn DebtCustomerList() -> impl IntoView {
    list_page::<DebtCustomerListItemDto>(&DEBT_CUSTOMER_LIST)
}
