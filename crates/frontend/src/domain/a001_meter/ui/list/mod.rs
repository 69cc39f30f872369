use contracts::domain::a001_meter::aggregate::{MeterListItemDto, METER_LIST};
use leptos::prelude::*;

use crate::shared::date_utils::format_date;
use crate::shared::list_page::list_page;
use crate::shared::list_row::{ListColumn, ListRow};
use crate::shared::number_format::format_units;

const COLUMNS: &[ListColumn] = &[
    ListColumn::text("Номер счётчика", 140).sortable("meterNumber"),
    ListColumn::text("Абонент", 200).sortable("customerName"),
    ListColumn::text("Лицевой счёт", 130),
    ListColumn::text("Тип", 110),
    ListColumn::text("Активен", 80),
    ListColumn::text("Вскрытие", 90),
    ListColumn::number("Кредит, кВт·ч", 120).sortable("creditBalance"),
    ListColumn::text("Установлен", 110).sortable("installedAt"),
];

fn yes_no(flag: bool) -> String {
    let label = if flag { "Да" } else { "Нет" };
    label.to_string()
}

impl ListRow for MeterListItemDto {
    fn columns() -> &'static [ListColumn] {
        COLUMNS
    }

    fn row_key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.meter_number.clone(),
            self.customer_name.clone(),
            self.account_number.clone(),
            self.meter_type.display_name().to_string(),
            yes_no(self.is_active),
            yes_no(self.is_tampered),
            format_units(self.credit_balance),
            format_date(&self.installed_at),
        ]
    }
}

#[component]
pub fn MeterList() -> impl IntoView {
    list_page::<MeterListItemDto>(&METER_LIST)
}
