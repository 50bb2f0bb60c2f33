//! Orchestration of the admin page
//!
//! [`AdminController`] runs every user action against the API and folds
//! the outcome into [`AdminState`]. It is generic over the transport and
//! the state store so the same code drives the page and the tests.

use contracts::enums::entity_kind::EntityKind;
use contracts::shared::record::{EntityRecord, RecordId};
use std::sync::Arc;

use super::state::{AdminState, StateStore};
use crate::shared::api::{EntityApi, HttpTransport, RequestError};

pub const DELETE_PROMPT: &str = "¿Está seguro de eliminar este elemento?";
pub const RECEIVE_PROMPT: &str = "¿Está seguro de marcar como recibida esta orden?";

const LOAD_ERROR: &str = "Error al cargar datos";
const SAVE_ERROR: &str = "Error al guardar";
const DELETE_ERROR: &str = "Error al eliminar";
const CANCEL_ERROR: &str = "Error al cancelar";
const RECEIVE_ERROR: &str = "Error al recibir orden";

/// Asks the user to confirm a destructive action
pub type Confirm = Arc<dyn Fn(&str) -> bool + Send + Sync>;

#[derive(Clone)]
pub struct AdminController<T, S> {
    api: EntityApi<T>,
    state: S,
    confirm: Confirm,
}

impl<T: HttpTransport, S: StateStore> AdminController<T, S> {
    pub fn new(
        api: EntityApi<T>,
        state: S,
        confirm: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            api,
            state,
            confirm: Arc::new(confirm),
        }
    }

    pub fn api(&self) -> &EntityApi<T> {
        &self.api
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Switch entity type and load its records
    pub async fn select_entity_type(&self, kind: EntityKind) {
        self.state.write(|s| {
            s.entity_type = kind;
            s.edit_target = None;
            s.records.clear();
            s.notice = None;
        });
        self.refresh().await;
    }

    /// Reload the records of the current entity type
    pub async fn refresh(&self) {
        let kind = self.state.read(|s| s.entity_type);
        self.state.write(AdminState::begin_request);

        let result = self.api.list_all(kind.as_str()).await;
        self.state.write(|s| {
            match result {
                Ok(records) => {
                    log::debug!("Loaded {} {}", records.len(), kind);
                    s.replace_records(records);
                }
                Err(e) => fail(s, LOAD_ERROR, e),
            }
            s.finish_request();
        });
    }

    /// Create a record, or update the edit target when one is set
    pub async fn save(&self, payload: EntityRecord) {
        let (kind, target) = self.state.read(|s| (s.entity_type, s.edit_target.clone()));

        let Some(target) = target else {
            self.state.write(AdminState::begin_request);
            let result = self.api.create(kind.as_str(), payload).await;
            self.state.write(|s| {
                match result {
                    Ok(created) => s.append_record(created),
                    Err(e) => fail(s, SAVE_ERROR, e),
                }
                s.finish_request();
            });
            return;
        };

        let Some(id) = RecordId::of(&target, kind.id_field()) else {
            self.state.write(|s| {
                s.fail(SAVE_ERROR, format!("registro sin {}", kind.id_field()));
            });
            return;
        };

        self.state.write(AdminState::begin_request);
        let result = self.api.full_update(kind.as_str(), &id, payload).await;
        self.state.write(|s| {
            match result {
                Ok(updated) => {
                    s.replace_record(&id, updated);
                    s.edit_target = None;
                }
                Err(e) => fail(s, SAVE_ERROR, e),
            }
            s.finish_request();
        });
    }

    /// Open `record` in the form
    pub fn edit(&self, record: EntityRecord) {
        self.state.write(|s| s.edit_target = Some(record));
    }

    /// Back to create mode
    pub fn clear_edit(&self) {
        self.state.write(|s| s.edit_target = None);
    }

    /// Drop the notice numbered `notice_id`; newer notices stay
    pub fn dismiss_notice(&self, notice_id: u64) {
        self.state.write(|s| s.dismiss_notice(notice_id));
    }

    /// Delete after confirmation; a denied prompt does nothing
    pub async fn delete(&self, id: RecordId) {
        if !(self.confirm)(DELETE_PROMPT) {
            return;
        }
        let kind = self.state.read(|s| s.entity_type);
        self.state.write(AdminState::begin_request);

        let result = self.api.delete(kind.as_str(), &id).await;
        self.state.write(|s| {
            match result {
                Ok(_) => s.remove_record(&id),
                Err(e) => fail(s, DELETE_ERROR, e),
            }
            s.finish_request();
        });
    }

    /// Cancel transition, then reload the list
    pub async fn cancel(&self, id: RecordId) {
        let kind = self.state.read(|s| s.entity_type);
        if !kind.supports_cancel() {
            log::warn!("No se puede cancelar tipo: {}", kind);
            return;
        }
        let prompt = format!("¿Está seguro de cancelar este {}?", kind.element_name());
        if !(self.confirm)(&prompt) {
            return;
        }
        self.state.write(AdminState::begin_request);

        let result = self.api.cancel(kind, &id).await;
        let succeeded = result.is_ok();
        self.state.write(|s| {
            match result {
                Ok(_) => s.show_notice(format!(
                    "{} cancelado correctamente",
                    capitalize(kind.element_name())
                )),
                Err(e) => fail(s, CANCEL_ERROR, e),
            }
            s.finish_request();
        });
        if succeeded {
            self.refresh().await;
        }
    }

    /// Mark a purchase order as received, then reload the list
    pub async fn receive(&self, id: RecordId) {
        let kind = self.state.read(|s| s.entity_type);
        if !kind.supports_receive() {
            log::warn!("Recepción no disponible para: {}", kind);
            return;
        }
        if !(self.confirm)(RECEIVE_PROMPT) {
            return;
        }
        self.state.write(AdminState::begin_request);

        let result = self.api.receive_purchase_order(&id).await;
        let succeeded = result.is_ok();
        self.state.write(|s| {
            match result {
                Ok(_) => s.show_notice("Orden recibida correctamente"),
                Err(e) => fail(s, RECEIVE_ERROR, e),
            }
            s.finish_request();
        });
        if succeeded {
            self.refresh().await;
        }
    }
}

fn fail(state: &mut AdminState, context: &str, err: RequestError) {
    log::error!("{}: {}", context, err);
    state.fail(context, err);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::fake::FakeTransport;
    use crate::shared::api::HttpMethod;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::sync::Mutex;

    type TestController = AdminController<FakeTransport, RefCell<AdminState>>;

    fn record(value: Value) -> EntityRecord {
        value.as_object().cloned().unwrap()
    }

    fn controller(kind: EntityKind, records: Vec<EntityRecord>, confirm: bool) -> TestController {
        let mut state = AdminState::new(kind);
        state.replace_records(records);
        AdminController::new(
            EntityApi::new(FakeTransport::new()),
            RefCell::new(state),
            move |_| confirm,
        )
    }

    fn transport(c: &TestController) -> &FakeTransport {
        c.api().transport()
    }

    fn snapshot(c: &TestController) -> AdminState {
        c.state().borrow().clone()
    }

    fn products() -> Vec<EntityRecord> {
        vec![
            record(json!({"id_producto": 1, "nombre": "A", "precio": 5})),
            record(json!({"id_producto": 2, "nombre": "B", "precio": 6})),
        ]
    }

    #[tokio::test]
    async fn select_entity_type_loads_records() {
        let c = controller(EntityKind::Productos, products(), true);
        c.edit(products()[0].clone());
        transport(&c).respond_json(200, json!([{"id_pedido": 1, "estado": "pendiente"}]));

        c.select_entity_type(EntityKind::Pedidos).await;

        let state = snapshot(&c);
        assert_eq!(state.entity_type, EntityKind::Pedidos);
        assert_eq!(state.edit_target, None);
        assert_eq!(state.records.len(), 1);
        assert!(!state.loading);
        assert_eq!(transport(&c).requests()[0].path, "/pedidos");
    }

    #[tokio::test]
    async fn failed_refresh_keeps_records() {
        let c = controller(EntityKind::Productos, products(), true);
        transport(&c).respond(500, "Internal Server Error", "");

        c.refresh().await;

        let state = snapshot(&c);
        assert_eq!(state.records, products());
        assert_eq!(
            state.error.as_deref(),
            Some("Error al cargar datos: Error: 500 Internal Server Error")
        );
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn create_sends_numbers_and_appends() {
        let c = controller(EntityKind::Productos, products(), true);
        let created = record(json!({"id_producto": 7, "nombre": "Widget", "precio": 10}));
        transport(&c).respond_json(201, Value::Object(created.clone()));

        c.save(record(json!({"nombre": "Widget", "precio": "10"}))).await;

        let sent = transport(&c).requests();
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].path, "/productos");
        assert_eq!(sent[0].body.as_ref().unwrap()["precio"], json!(10));
        let state = snapshot(&c);
        assert_eq!(state.records.len(), 3);
        assert_eq!(state.records[2], created);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn update_replaces_in_place_and_leaves_edit_mode() {
        let c = controller(EntityKind::Productos, products(), true);
        c.edit(products()[0].clone());
        let updated = record(json!({"id_producto": 1, "nombre": "A2", "precio": 8}));
        transport(&c).respond_json(200, Value::Object(updated.clone()));

        c.save(record(json!({"nombre": "A2", "precio": 8}))).await;

        let sent = transport(&c).requests();
        assert_eq!(sent[0].method, HttpMethod::Put);
        assert_eq!(sent[0].path, "/productos/1");
        let state = snapshot(&c);
        assert_eq!(state.records[0], updated);
        assert_eq!(state.records[1], products()[1]);
        assert_eq!(state.edit_target, None);
    }

    #[tokio::test]
    async fn failed_update_keeps_edit_target() {
        let c = controller(EntityKind::Productos, products(), true);
        c.edit(products()[1].clone());
        transport(&c).respond(400, "Bad Request", r#"{"error":"precio inválido"}"#);

        c.save(record(json!({"nombre": "B", "precio": -1}))).await;

        let state = snapshot(&c);
        assert_eq!(state.records, products());
        assert_eq!(state.edit_target, Some(products()[1].clone()));
        assert_eq!(state.error.as_deref(), Some("Error al guardar: precio inválido"));
    }

    #[tokio::test]
    async fn delete_removes_matching_record() {
        let c = controller(EntityKind::Productos, products(), true);
        transport(&c).respond(204, "No Content", "");

        c.delete(RecordId::from(2)).await;

        let state = snapshot(&c);
        assert_eq!(state.records, vec![products()[0].clone()]);
        assert_eq!(transport(&c).requests()[0].method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn delete_not_found_reports_and_keeps_records() {
        let c = controller(EntityKind::Productos, products(), true);
        transport(&c).respond(404, "Not Found", r#"{"error":"not found"}"#);

        c.delete(RecordId::from(2)).await;

        let state = snapshot(&c);
        assert_eq!(state.records, products());
        assert!(state.error.unwrap().contains("not found"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn denied_confirmation_sends_nothing() {
        let c = controller(EntityKind::Ordenes, Vec::new(), false);

        c.delete(RecordId::from(1)).await;
        c.cancel(RecordId::from(1)).await;
        c.receive(RecordId::from(1)).await;

        assert!(transport(&c).requests().is_empty());
        assert_eq!(snapshot(&c), AdminState::new(EntityKind::Ordenes));
    }

    #[tokio::test]
    async fn cancel_asks_with_element_name_then_refreshes() {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let seen = prompts.clone();
        let c = AdminController::new(
            EntityApi::new(FakeTransport::new()),
            RefCell::new(AdminState::new(EntityKind::Pedidos)),
            move |prompt: &str| {
                seen.lock().unwrap().push(prompt.to_string());
                true
            },
        );
        transport(&c).respond_json(200, json!({"ok": true}));
        transport(&c).respond_json(200, json!([{"id_pedido": 4, "estado": "cancelado"}]));

        c.cancel(RecordId::from(4)).await;

        assert_eq!(
            *prompts.lock().unwrap(),
            vec!["¿Está seguro de cancelar este pedido?".to_string()]
        );
        let paths: Vec<String> = transport(&c).requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/pedidos/4/cancelar", "/pedidos"]);
        let state = c.state().borrow().clone();
        assert_eq!(state.notice.as_deref(), Some("Pedido cancelado correctamente"));
        assert_eq!(state.records[0]["estado"], json!("cancelado"));
    }

    #[tokio::test]
    async fn failed_cancel_skips_refresh() {
        let c = controller(EntityKind::Ventas, Vec::new(), true);
        transport(&c).respond(409, "Conflict", r#"{"error":"ya cancelada"}"#);

        c.cancel(RecordId::from(1)).await;

        assert_eq!(transport(&c).requests().len(), 1);
        let state = snapshot(&c);
        assert_eq!(state.error.as_deref(), Some("Error al cancelar: ya cancelada"));
        assert_eq!(state.notice, None);
    }

    #[tokio::test]
    async fn receive_marks_order_and_refreshes() {
        let c = controller(EntityKind::Ordenes, Vec::new(), true);
        transport(&c).respond_json(200, json!({"ok": true}));
        transport(&c).respond_json(200, json!([{"id_orden_proveedor": 3, "estado": "recibida"}]));

        c.receive(RecordId::from(3)).await;

        let paths: Vec<String> = transport(&c).requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/ordenes/3/recibir", "/ordenes"]);
        let state = snapshot(&c);
        assert_eq!(state.notice.as_deref(), Some("Orden recibida correctamente"));
        assert_eq!(state.records.len(), 1);
    }

    #[tokio::test]
    async fn earlier_notice_timer_does_not_clear_newer_notice() {
        let c = controller(EntityKind::Ordenes, Vec::new(), true);
        for _ in 0..2 {
            transport(&c).respond_json(200, json!({"ok": true}));
            transport(&c).respond_json(200, json!([]));
        }

        c.receive(RecordId::from(1)).await;
        let first = c.state().read(AdminState::active_notice).unwrap();
        c.cancel(RecordId::from(2)).await;
        let second = c.state().read(AdminState::active_notice).unwrap();

        c.dismiss_notice(first);
        assert_eq!(
            snapshot(&c).notice.as_deref(),
            Some("Orden cancelado correctamente")
        );
        c.dismiss_notice(second);
        assert_eq!(snapshot(&c).notice, None);
    }

    #[tokio::test]
    async fn transitions_ignored_for_plain_types() {
        let c = controller(EntityKind::Proveedores, Vec::new(), true);

        c.cancel(RecordId::from(1)).await;
        c.receive(RecordId::from(1)).await;

        assert!(transport(&c).requests().is_empty());
    }
}
