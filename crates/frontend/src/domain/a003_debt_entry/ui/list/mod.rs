use contracts::domain::a003_debt_entry::aggregate::{DebtEntryListItemDto, DEBT_ENTRY_LIST};
use leptos::prelude::*;

use crate::shared::date_utils::format_datetime;
use crate::shared::list_page::list_page;
use crate::shared::list_row::{ListColumn, ListRow};
use crate::shared::number_format::format_money;

const COLUMNS: &[ListColumn] = &[
    ListColumn::text("Дата", 140).sortable("createdAt"),
    ListColumn::text("Документ", 130).sortable("reference"),
    ListColumn::text("Лицевой счёт", 130),
    ListColumn::text("Вид", 110),
    ListColumn::text("Описание", 240),
    ListColumn::number("Сумма", 110).sortable("amount"),
];

impl ListRow for DebtEntryListItemDto {
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
            self.account_number.clone(),
            self.entry_type.display_name().to_string(),
            self.description.clone(),
            format_money(self.amount),
        ]
    }
}

#[component]
pub fn DebtEntryList() -> impl IntoView {
    list_page::<DebtEntryListItemDto>(&DEBT_ENTRY_LIST)
}
