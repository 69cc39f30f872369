//! Контроллер списочных экранов
//!
//! Черновик фильтров ([`draft`]) и применённый отбор ([`applied`]) живут
//! раздельно: запрос строится только из применённого. [`pagination`] ведёт
//! номер страницы и поколения запросов, [`controller`] сводит всё вместе,
//! [`session`] связывает контроллер с leptos и [`source`] с backend'ом.

pub mod applied;
pub mod controller;
pub mod draft;
pub mod pagination;
pub mod session;
pub mod source;

pub use controller::{Completion, FetchTicket, ListController, ListSnapshot};
pub use pagination::{LoadState, PageInfo};
pub use session::ListSession;
pub use source::{FetchError, HttpListSource, ListSource};
