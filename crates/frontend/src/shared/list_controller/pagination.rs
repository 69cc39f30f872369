use contracts::shared::list_query::{ListQueryError, PageMeta, PageRequest};

/// Состояние загрузки списка
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Что видит пользователь в блоке пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page_number: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Номер и размер страницы, итоги от сервера и счётчик поколений запросов.
///
/// Каждый запрос получает новое поколение; ответ с устаревшим поколением
/// игнорируется, поэтому на экране всегда результат последнего запроса.
#[derive(Debug, Clone)]
pub struct PaginationController {
    page_number: usize,
    page_size: usize,
    meta: PageMeta,
    state: LoadState,
    generation: u64,
    /// Страница, строки которой сейчас на экране
    loaded_page: usize,
    /// Итоги относятся к прежнему отбору или размеру страницы
    totals_stale: bool,
}

impl PaginationController {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_number: 1,
            page_size: page_size.max(1),
            meta: PageMeta::default(),
            state: LoadState::Idle,
            generation: 0,
            loaded_page: 1,
            totals_stale: false,
        }
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page_number, self.page_size)
    }

    /// После ошибки показывается страница, строки которой остались на экране
    pub fn displayed_page(&self) -> usize {
        match self.state {
            LoadState::Error(_) => self.loaded_page,
            _ => self.page_number,
        }
    }

    pub fn info(&self) -> PageInfo {
        PageInfo {
            page_number: self.displayed_page(),
            page_size: self.page_size,
            total_count: self.meta.total_count,
            total_pages: self.meta.total_pages,
            has_next: self.meta.has_next,
            has_previous: self.meta.has_previous,
        }
    }

    /// Переход на страницу. Вне диапазона известных итогов или та же
    /// страница - no-op (false). Пока итоги нового отбора не пришли,
    /// диапазона нет и переход тоже no-op.
    pub fn set_page(&mut self, page_number: usize) -> bool {
        if self.totals_stale
            || page_number < 1
            || page_number > self.meta.total_pages
            || page_number == self.displayed_page()
        {
            return false;
        }
        self.page_number = page_number;
        true
    }

    /// Изменился отбор: всегда на первую страницу
    pub fn query_changed(&mut self) {
        self.page_number = 1;
        self.totals_stale = true;
    }

    /// Возвращает true, если размер страницы действительно изменился
    pub fn set_page_size(&mut self, page_size: usize) -> Result<bool, ListQueryError> {
        if page_size == 0 {
            return Err(ListQueryError::InvalidPageSize(page_size));
        }
        if page_size == self.page_size {
            return Ok(false);
        }
        self.page_size = page_size;
        self.page_number = 1;
        self.totals_stale = true;
        Ok(true)
    }

    /// Новый запрос: следующее поколение, состояние Loading
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Итоги сохраняются как есть, без пересчёта
    pub fn succeeded(&mut self, generation: u64, meta: PageMeta) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.meta = meta;
        self.state = LoadState::Loaded;
        self.loaded_page = self.page_number;
        self.totals_stale = false;
        true
    }

    /// Ошибка не трогает итоги и строки предыдущей успешной загрузки
    pub fn failed(&mut self, generation: u64, message: String) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.state = LoadState::Error(message);
        true
    }
}
