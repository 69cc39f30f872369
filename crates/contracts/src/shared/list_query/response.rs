use serde::{Deserialize, Serialize};

use super::request::PageRequest;

/// Ответ списочного endpoint'а
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    #[serde(rename = "data")]
    pub items: Vec<T>,
    pub total_count: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> ListResult<T> {
    /// Страница отфильтрованного набора; `items` - уже вырезанная страница
    pub fn page(items: Vec<T>, total_count: usize, page: PageRequest) -> Self {
        let total_pages = if page.page_size > 0 {
            total_count.div_ceil(page.page_size)
        } else {
            0
        };
        Self {
            items,
            total_count,
            current_page: page.page_number,
            page_size: page.page_size,
            total_pages,
            has_next: page.page_number < total_pages,
            has_previous: page.page_number > 1,
        }
    }

    /// Весь набор одной страницей (выгрузка)
    pub fn unpaginated(items: Vec<T>) -> Self {
        let total_count = items.len();
        Self {
            items,
            total_count,
            current_page: 1,
            page_size: total_count,
            total_pages: if total_count > 0 { 1 } else { 0 },
            has_next: false,
            has_previous: false,
        }
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta {
            total_count: self.total_count,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

/// Итоги пагинации, сообщённые сервером
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_count: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Тело ответа с ошибкой (non-2xx)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
