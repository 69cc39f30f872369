use contracts::shared::list_query::{FilterValue, FilterValues, ListQueryError, ListScreen};

/// Черновик фильтров: то, что пользователь ввёл в панели, но ещё не применил.
/// Изменения черновика никогда не приводят к запросу.
#[derive(Debug, Clone)]
pub struct FilterDraftStore {
    screen: &'static ListScreen,
    values: FilterValues,
}

impl FilterDraftStore {
    pub fn new(screen: &'static ListScreen) -> Self {
        Self {
            screen,
            values: screen.empty_filters(),
        }
    }

    /// Сохраняет значение поля. Неизвестное поле или значение не того
    /// вида отклоняется, черновик при этом не меняется.
    pub fn set(&mut self, key: &str, value: FilterValue) -> Result<(), ListQueryError> {
        let field = self
            .screen
            .field(key)
            .ok_or_else(|| ListQueryError::UnknownField(key.to_string()))?;
        if !value.matches_kind(&field.kind) {
            return Err(ListQueryError::KindMismatch {
                key: key.to_string(),
                expected: field.kind.as_str(),
            });
        }
        self.values.insert(field.key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    pub fn values(&self) -> &FilterValues {
        &self.values
    }

    pub fn snapshot(&self) -> FilterValues {
        self.values.clone()
    }

    /// Количество заполненных полей (бейдж на панели фильтров)
    pub fn active_count(&self) -> usize {
        self.values.active_count()
    }

    pub fn reset(&mut self) {
        self.values = self.screen.empty_filters();
    }

    /// Восстановление из сохранённого набора; чужие ключи и значения
    /// неподходящего вида пропускаются
    pub fn load(&mut self, values: &FilterValues) {
        self.reset();
        for field in self.screen.filters {
            if let Some(value) = values.get(field.key) {
                if value.matches_kind(&field.kind) {
                    self.values.insert(field.key, value.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_debt_customer::aggregate::DEBT_CUSTOMER_LIST;

    #[test]
    fn test_set_and_count() {
        let mut drafts = FilterDraftStore::new(&DEBT_CUSTOMER_LIST);
        assert_eq!(drafts.active_count(), 0);

        drafts.set("minDebt", FilterValue::number_input("5000")).unwrap();
        drafts.set("status", FilterValue::enum_input("2")).unwrap();
        assert_eq!(drafts.active_count(), 2);
        assert_eq!(drafts.get("minDebt"), Some(&FilterValue::Number(Some(5000.0))));

        // очистка поля уменьшает счётчик
        drafts.set("status", FilterValue::enum_input("")).unwrap();
        assert_eq!(drafts.active_count(), 1);
    }

    #[test]
    fn test_rejects_unknown_field_and_wrong_kind() {
        let mut drafts = FilterDraftStore::new(&DEBT_CUSTOMER_LIST);
        let before = drafts.snapshot();

        assert_eq!(
            drafts.set("password", FilterValue::Text("x".into())),
            Err(ListQueryError::UnknownField("password".into()))
        );
        assert!(matches!(
            drafts.set("minDebt", FilterValue::Text("5000".into())),
            Err(ListQueryError::KindMismatch { .. })
        ));
        assert_eq!(drafts.snapshot(), before);
    }

    #[test]
    fn test_reset_and_load() {
        let mut drafts = FilterDraftStore::new(&DEBT_CUSTOMER_LIST);
        drafts.set("accountNumber", FilterValue::Text("AC-1".into())).unwrap();
        let saved = drafts.snapshot();

        drafts.reset();
        assert_eq!(drafts.active_count(), 0);
        assert_eq!(drafts.get("accountNumber"), Some(&FilterValue::Text(String::new())));

        let mut foreign = saved.clone();
        foreign.insert("unknown", FilterValue::Boolean(Some(true)));
        drafts.load(&foreign);
        assert_eq!(drafts.snapshot(), saved);
    }
}
