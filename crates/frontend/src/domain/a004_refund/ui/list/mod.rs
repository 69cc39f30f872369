use contracts::domain::a004_refund::aggregate::{RefundListItemDto, REFUND_LIST};
use leptos::prelude::*;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_page::list_page;
use crate::shared::list_row::{ListColumn, ListRow};
use crate::shared::number_format::format_money;

const COLUMNS: &[ListColumn] = &[
    ListColumn::text("Дата заявки", 140).sortable("requestedAt"),
    ListColumn::text("Номер", 120),
    ListColumn::text("Абонент", 200).sortable("customerName"),
    ListColumn::text("Счётчик", 120),
    ListColumn::text("Статус", 110),
    ListColumn::number("Сумма", 110).sortable("amount"),
];

impl ListRow for RefundListItemDto {
    fn columns() -> &'static [ListColumn] {
        COLUMNS
    }

    fn row_key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            format_datetime(&self.requested_at),
            self.reference.clone(),
            self.customer_name.clone(),
            self.meter_number.clone(),
            self.status.display_name().to_string(),
            format_money(self.amount),
        ]
    }
}

#[component]
pub fn RefundList() -> impl IntoView {
    list_page::<RefundListItemDto>(&REFUND_LIST)
}
