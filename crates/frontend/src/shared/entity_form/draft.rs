//! Form draft state machine
//!
//! A [`FormDraft`] holds one value per field descriptor. It is in
//! [`FormMode::Edit`] while a target record is assigned and in
//! [`FormMode::Create`] otherwise. The view owns one draft and feeds it
//! user input; everything here is plain data so it is tested on the host.

use contracts::shared::coercion::{capture_input, coerce_for_kind};
use contracts::shared::metadata::{FieldDescriptor, ValidationError};
use contracts::shared::record::EntityRecord;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    fields: &'static [FieldDescriptor],
    target: Option<EntityRecord>,
    values: EntityRecord,
}

impl FormDraft {
    /// Empty draft in create mode
    pub fn new(fields: &'static [FieldDescriptor]) -> Self {
        Self::for_target(fields, None)
    }

    pub fn for_target(fields: &'static [FieldDescriptor], target: Option<EntityRecord>) -> Self {
        let mut draft = Self {
            fields,
            target,
            values: EntityRecord::new(),
        };
        draft.repopulate();
        draft
    }

    pub fn mode(&self) -> FormMode {
        if self.target.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn values(&self) -> &EntityRecord {
        &self.values
    }

    /// Enter edit mode for `target`, or create mode with `None`
    pub fn set_target(&mut self, target: Option<EntityRecord>) {
        self.target = target;
        self.repopulate();
    }

    /// Switch to another descriptor list, e.g. after an entity type change
    pub fn set_fields(&mut self, fields: &'static [FieldDescriptor]) {
        self.fields = fields;
        self.repopulate();
    }

    /// Store raw input for `name`; numeric fields keep only the parsed prefix.
    ///
    /// Returns false (and stores nothing) for names outside the descriptor list.
    pub fn update_field(&mut self, name: &str, raw: &str) -> bool {
        let Some(field) = self.fields.iter().find(|f| f.name == name) else {
            return false;
        };
        self.values
            .insert(field.name.to_string(), capture_input(field.kind, raw));
        true
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Text shown in the control for `name`
    pub fn display_value(&self, name: &str) -> String {
        match self.values.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Validate and build the payload.
    ///
    /// Required fields are checked in descriptor order and the first falsy
    /// one is reported. Create mode starts over with an empty draft on
    /// success; edit mode keeps its values until the target changes.
    pub fn submit(&mut self) -> Result<EntityRecord, ValidationError> {
        for field in self.fields {
            let value = self.values.get(field.name).cloned().unwrap_or_default();
            field
                .validation
                .validate_required(field.name, field.label, &value)?;
        }

        let mut payload = EntityRecord::new();
        for field in self.fields {
            let value = self.values.get(field.name).cloned().unwrap_or_default();
            payload.insert(field.name.to_string(), coerce_for_kind(field.kind, &value));
        }

        if self.mode() == FormMode::Create {
            self.repopulate();
        }
        Ok(payload)
    }

    /// [`submit`](Self::submit), handing the payload to `on_save` exactly once
    pub fn submit_with(
        &mut self,
        on_save: impl FnOnce(EntityRecord),
    ) -> Result<(), ValidationError> {
        let payload = self.submit()?;
        on_save(payload);
        Ok(())
    }

    fn repopulate(&mut self) {
        let target = self.target.as_ref();
        self.values = self
            .fields
            .iter()
            .map(|field| {
                let value = target
                    .and_then(|record| record.get(field.name))
                    .filter(|value| !value.is_null())
                    .cloned()
                    .unwrap_or_else(|| Value::String(String::new()));
                (field.name.to_string(), value)
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::registry::form_fields;
    use serde_json::json;

    fn record(value: Value) -> EntityRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn create_mode_starts_with_empty_strings() {
        let draft = FormDraft::new(form_fields("productos"));
        assert_eq!(draft.mode(), FormMode::Create);
        assert_eq!(draft.values().len(), 5);
        assert!(draft.values().values().all(|v| v == &json!("")));
    }

    #[test]
    fn edit_mode_copies_target_and_blanks_nulls() {
        let target = record(json!({
            "id_producto": 3,
            "nombre": "Tuerca",
            "descripcion": null,
            "precio": 2.5,
            "fecha_creacion": "2024-01-01"
        }));
        let draft = FormDraft::for_target(form_fields("productos"), Some(target));

        assert_eq!(draft.mode(), FormMode::Edit);
        assert_eq!(draft.value("nombre"), Some(&json!("Tuerca")));
        assert_eq!(draft.value("descripcion"), Some(&json!("")));
        assert_eq!(draft.value("precio"), Some(&json!(2.5)));
        assert_eq!(draft.value("existencia"), Some(&json!("")));
        assert_eq!(draft.value("id_producto"), None);
        assert_eq!(draft.display_value("precio"), "2.5");
    }

    #[test]
    fn clearing_target_resets_to_create() {
        let mut draft = FormDraft::for_target(
            form_fields("proveedores"),
            Some(record(json!({"id_proveedor": 1, "nombre": "ACME"}))),
        );
        draft.set_target(None);
        assert_eq!(draft.mode(), FormMode::Create);
        assert_eq!(draft.display_value("nombre"), "");
    }

    #[test]
    fn switching_fields_rederives_the_draft() {
        let mut draft = FormDraft::new(form_fields("productos"));
        draft.update_field("nombre", "Tornillo");
        draft.set_fields(form_fields("ventas"));
        assert_eq!(draft.value("nombre"), None);
        assert_eq!(draft.values().len(), form_fields("ventas").len());
    }

    #[test]
    fn numeric_input_keeps_parsed_prefix() {
        let mut draft = FormDraft::new(form_fields("productos"));
        draft.update_field("precio", "12.5kg");
        assert_eq!(draft.value("precio"), Some(&json!(12.5)));
        draft.update_field("precio", "abc");
        assert_eq!(draft.value("precio"), Some(&json!("")));
        draft.update_field("precio", "");
        assert_eq!(draft.value("precio"), Some(&json!("")));
        draft.update_field("nombre", " 10 ");
        assert_eq!(draft.value("nombre"), Some(&json!(" 10 ")));
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut draft = FormDraft::new(form_fields("productos"));
        assert!(!draft.update_field("sku", "x"));
        assert_eq!(draft.value("sku"), None);
    }

    #[test]
    fn missing_required_field_blocks_save() {
        let mut draft = FormDraft::new(form_fields("productos"));
        draft.update_field("nombre", "Widget");
        let mut calls = 0;

        let err = draft.submit_with(|_| calls += 1).unwrap_err();

        assert_eq!(calls, 0);
        assert_eq!(err.field, "precio");
        assert_eq!(err.to_string(), "El campo Precio es obligatorio");
        assert_eq!(draft.display_value("nombre"), "Widget");
    }

    #[test]
    fn first_missing_field_in_order_is_reported() {
        let mut draft = FormDraft::new(form_fields("productos"));
        let err = draft.submit().unwrap_err();
        assert_eq!(err.field, "nombre");
    }

    #[test]
    fn zero_does_not_satisfy_required() {
        let mut draft = FormDraft::new(form_fields("ordenes"));
        draft.update_field("id_proveedor", "2");
        draft.update_field("estado", "pendiente");
        draft.update_field("total", "0");
        let err = draft.submit().unwrap_err();
        assert_eq!(err.field, "total");
    }

    #[test]
    fn valid_create_saves_once_and_resets() {
        let mut draft = FormDraft::new(form_fields("productos"));
        draft.update_field("nombre", "Widget");
        draft.update_field("precio", "10");
        let mut saved = Vec::new();

        draft.submit_with(|payload| saved.push(payload)).unwrap();

        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0]["nombre"], json!("Widget"));
        assert_eq!(saved[0]["precio"], json!(10));
        assert_eq!(saved[0]["existencia"], json!(""));
        assert_eq!(draft.display_value("nombre"), "");
    }

    #[test]
    fn edit_submit_keeps_values_and_coerces_numbers() {
        let target = record(json!({"id_venta": 4, "estado": "pendiente", "total": "99.5"}));
        let mut draft = FormDraft::for_target(form_fields("ventas"), Some(target));

        let payload = draft.submit().unwrap();

        assert_eq!(payload["total"], json!(99.5));
        assert_eq!(payload["estado"], json!("pendiente"));
        assert_eq!(draft.mode(), FormMode::Edit);
        assert_eq!(draft.display_value("total"), "99.5");
    }
}
