use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Состояние форм (отбор списков), которое переживает переключение вкладок.
/// Хранится в памяти, ключ - id экрана.
#[derive(Clone, Debug, Default)]
pub struct FormStateStore {
    states: HashMap<String, Value>,
}

impl FormStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_state(&self, form_key: &str) -> Option<&Value> {
        self.states.get(form_key)
    }

    pub fn set_state(&mut self, form_key: String, state: Value) {
        self.states.insert(form_key, state);
    }

    pub fn remove_state(&mut self, form_key: &str) {
        self.states.remove(form_key);
    }

    /// Типизированное чтение; несовместимое сохранённое значение = None
    pub fn load<T: DeserializeOwned>(&self, form_key: &str) -> Option<T> {
        self.get_state(form_key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn save<T: Serialize>(&mut self, form_key: &str, state: &T) {
        match serde_json::to_value(state) {
            Ok(value) => self.set_state(form_key.to_string(), value),
            Err(err) => log::warn!("form state {}: не удалось сохранить: {}", form_key, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_meter::aggregate::METER_LIST;
    use contracts::shared::list_query::{AppliedQuery, FilterValue, SortSpec};

    #[test]
    fn test_applied_query_survives_round_trip() {
        let mut store = FormStateStore::new();
        let mut query = AppliedQuery::for_screen(&METER_LIST);
        query.filters.insert("isTampered", FilterValue::Boolean(Some(true)));
        query.filters.insert("installed", FilterValue::date_range_input("2024-02-01", ""));
        query.sort = Some(SortSpec::desc("installedAt"));

        store.save(METER_LIST.id, &query);
        assert_eq!(store.load::<AppliedQuery>(METER_LIST.id), Some(query));

        store.remove_state(METER_LIST.id);
        assert_eq!(store.load::<AppliedQuery>(METER_LIST.id), None);
    }

    #[test]
    fn test_incompatible_state_ignored() {
        let mut store = FormStateStore::new();
        store.set_state("meters".into(), serde_json::json!({"page": "x"}));
        assert_eq!(store.load::<AppliedQuery>("meters"), None);
    }
}
