/// Колонка таблицы списочного экрана
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListColumn {
    pub title: &'static str,
    /// Ключ сортировки (`sortBy`), если по колонке можно сортировать
    pub sort_field: Option<&'static str>,
    pub min_width: u16,
    /// Числовая колонка: выравнивание вправо
    pub numeric: bool,
}

impl ListColumn {
    pub const fn text(title: &'static str, min_width: u16) -> Self {
        Self {
            title,
            sort_field: None,
            min_width,
            numeric: false,
        }
    }

    pub const fn number(title: &'static str, min_width: u16) -> Self {
        Self {
            title,
            sort_field: None,
            min_width,
            numeric: true,
        }
    }

    pub const fn sortable(self, field: &'static str) -> Self {
        Self {
            sort_field: Some(field),
            ..self
        }
    }
}

/// Строка списка: одна и та же раскладка для таблицы и для CSV
pub trait ListRow: Clone + Send + Sync + 'static {
    fn columns() -> &'static [ListColumn];

    /// Ключ строки для `<For>`
    fn row_key(&self) -> String;

    /// Значения ячеек в порядке `columns()`
    fn cells(&self) -> Vec<String>;
}
