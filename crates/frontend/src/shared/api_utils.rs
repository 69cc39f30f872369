//! Адреса backend API
//!
//! Backend слушает порт 3000 на том же хосте, что и страница.

use contracts::shared::list_query::QueryRequest;

/// Базовый адрес API, например "http://localhost:3000".
/// Пустая строка, если window недоступен.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Полный адрес по пути вида "/api/..."
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Параметры запроса списка в строку `a=1&b=2` (порядок сохраняется)
pub fn encode_query(request: &QueryRequest) -> String {
    request
        .pairs()
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Путь с query-строкой, без базового адреса
pub fn path_with_query(path: &str, request: &QueryRequest) -> String {
    let query = encode_query(request);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Полный адрес списочного запроса
pub fn query_url(path: &str, request: &QueryRequest) -> String {
    api_url(&path_with_query(path, request))
}
