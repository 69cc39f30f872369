use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Первый и последний день месяца
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// Месяц перед месяцем даты `from` (или перед текущим, если дата пустая)
pub fn previous_month(from: &str, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let anchor = NaiveDate::parse_from_str(from, DATE_FORMAT).unwrap_or(today);
    let (year, month) = if anchor.month() == 1 {
        (anchor.year() - 1, 12)
    } else {
        (anchor.year(), anchor.month() - 1)
    };
    month_bounds(year, month)
}

fn format_bounds((from, to): (NaiveDate, NaiveDate)) -> (String, String) {
    (
        from.format(DATE_FORMAT).to_string(),
        to.format(DATE_FORMAT).to_string(),
    )
}

/// Период дат: два поля и быстрый выбор месяца. Пустое поле - граница не задана.
#[component]
pub fn DateRangePicker(
    /// Дата "от" в формате yyyy-mm-dd
    #[prop(into)]
    date_from: Signal<String>,

    /// Дата "до" в формате yyyy-mm-dd
    #[prop(into)]
    date_to: Signal<String>,

    /// (from, to)
    on_change: Callback<(String, String)>,

    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        on_change.run((new_from, date_to.get_untracked()));
    };
    let on_to_change = move |new_to: String| {
        on_change.run((date_from.get_untracked(), new_to));
    };

    let on_current_month = move |_| {
        let today = Utc::now().date_naive();
        if let Some(bounds) = month_bounds(today.year(), today.month()) {
            on_change.run(format_bounds(bounds));
        }
    };
    let on_previous_month = move |_| {
        let today = Utc::now().date_naive();
        if let Some(bounds) = previous_month(&date_from.get_untracked(), today) {
            on_change.run(format_bounds(bounds));
        }
    };
    let on_clear = move |_| on_change.run((String::new(), String::new()));

    let input_style = "margin: 4px 0 4px 4px; padding: 0px 12px; font-size: 0.875rem; border: none; \
                       border-radius: var(--borderRadiusMedium, 4px); background: var(--colorNeutralBackground6, #fff); \
                       color: var(--colorNeutralForeground1, #242424); width: 130px;";

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    prop:value=date_from
                    on:input=move |ev| on_from_change(event_target_value(&ev))
                    style=input_style
                />
                <div>"—"</div>
                <input
                    type="date"
                    prop:value=date_to
                    on:input=move |ev| on_to_change(event_target_value(&ev))
                    style=input_style
                />
                <div class="date-range-picker-compact">
                    <ButtonGroup>
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_previous_month>
                            "-1M"
                        </Button>
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_current_month>
                            "0M"
                        </Button>
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_clear>
                            "×"
                        </Button>
                    </ButtonGroup>
                </div>
            </Flex>
        </Flex>
    }
}
