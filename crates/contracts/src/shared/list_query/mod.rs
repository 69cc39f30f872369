//! Контракт списочных экранов: фильтры, сортировка, поиск, пагинация
//!
//! Все списочные экраны (счётчики, должники, начисления, возвраты,
//! предоплатные транзакции) описываются статическим [`ListScreen`] и
//! обмениваются с сервером одним и тем же [`QueryRequest`] / [`ListResult`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::list_query::{build, AppliedQuery, PageRequest};
//! use contracts::domain::a002_debt_customer::aggregate::DEBT_CUSTOMER_LIST;
//!
//! let request = build(&DEBT_CUSTOMER_LIST, &AppliedQuery::default(), PageRequest::first(50));
//! assert_eq!(request.get("pageNumber"), Some("1"));
//! ```

mod builder;
mod error;
mod filter;
mod request;
mod response;
mod screen;
mod search;
mod sort;

pub use builder::{build, build_export, AppliedQuery};
pub use error::ListQueryError;
pub use filter::{DateBound, EnumOption, FilterField, FilterKind, FilterValue, FilterValues, NumberBound};
pub use request::{
    PageRequest, ParsedQuery, QueryRequest, PAGE_NUMBER, PAGE_SIZE, SEARCH, SORT_BY, SORT_ORDER,
};
pub use response::{ErrorEnvelope, ListResult, PageMeta};
pub use screen::ListScreen;
pub use search::{SearchInput, SearchPolicy, MIN_SEARCH_LEN};
pub use sort::{SortDirection, SortKey, SortSpec};
