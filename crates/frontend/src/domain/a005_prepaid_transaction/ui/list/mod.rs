use contracts::domain::a005_prepaid_transaction::aggregate::{
    PrepaidTransactionListItemDto, PREPAID_TRANSACTION_LIST,
};
use leptos::prelude::*;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_page::list_page;
use crate::shared::list_row::{ListColumn, ListRow};
use crate::shared::number_format::{format_money, format_units};

const COLUMNS: &[ListColumn] = &[
    ListColumn::text("Дата", 140).sortable("createdAt"),
    ListColumn::text("Транзакция", 130),
    ListColumn::text("Счётчик", 120),
    ListColumn::text("Абонент", 200),
    ListColumn::text("Канал", 110),
    ListColumn::number("Сумма", 110).sortable("amount"),
    ListColumn::number("кВт·ч", 100).sortable("unitsKwh"),
    ListColumn::text("Токен", 200),
];

impl ListRow for PrepaidTransactionListItemDto {
    fn columns() -> &'static [ListColumn] {
        COLUMNS
    }

    fn row_key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            format_datetime(&self.created_at),
            self.reference.clone(),
            self.meter_number.clone(),
            self.customer_name.clone(),
            self.channel.display_name().to_string(),
            format_money(self.amount),
            format_units(self.units_kwh),
            self.token.clone(),
        ]
    }
}

#[component]
pub fn PrepaidTransactionList() -> impl IntoView {
    list_page::<PrepaidTransactionListItemDto>(&PREPAID_TRANSACTION_LIST)
}
