//! REST client for the entity collections
//!
//! One method per backend operation. Each issues exactly one request and
//! unwraps the response the same way: non-2xx becomes a [`RequestError`],
//! success bodies are decoded from JSON. Nothing is retried.

use contracts::enums::entity_kind::EntityKind;
use contracts::shared::coercion::coerce_numeric_strings;
use contracts::shared::record::{EntityRecord, RecordId};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::error::RequestError;
use super::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Whatever the backend answers to deletes and transitions
pub type Acknowledgement = Value;

#[derive(Debug, Clone)]
pub struct EntityApi<T> {
    transport: T,
}

impl<T: HttpTransport> EntityApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /{entity_type}`
    pub async fn list_all(&self, entity_type: &str) -> Result<Vec<EntityRecord>, RequestError> {
        let request = HttpRequest::new(HttpMethod::Get, collection_path(entity_type));
        self.fetch(request).await
    }

    /// `GET /{entity_type}/{id}`
    pub async fn get_one(
        &self,
        entity_type: &str,
        id: &RecordId,
    ) -> Result<EntityRecord, RequestError> {
        let request = HttpRequest::new(HttpMethod::Get, item_path(entity_type, id));
        self.fetch(request).await
    }

    /// `POST /{entity_type}`; numeric strings are sent as numbers
    pub async fn create(
        &self,
        entity_type: &str,
        mut draft: EntityRecord,
    ) -> Result<EntityRecord, RequestError> {
        coerce_numeric_strings(&mut draft);
        let request = HttpRequest::new(HttpMethod::Post, collection_path(entity_type))
            .with_body(Value::Object(draft));
        self.fetch(request).await
    }

    /// `PUT /{entity_type}/{id}`; numeric strings are sent as numbers
    pub async fn full_update(
        &self,
        entity_type: &str,
        id: &RecordId,
        mut draft: EntityRecord,
    ) -> Result<EntityRecord, RequestError> {
        coerce_numeric_strings(&mut draft);
        log::info!("Actualizando {}/{} con: {}", entity_type, id, Value::Object(draft.clone()));
        let request = HttpRequest::new(HttpMethod::Put, item_path(entity_type, id))
            .with_body(Value::Object(draft));
        self.fetch_logged(request, "Error al actualizar").await
    }

    /// `PATCH /{entity_type}/{id}` with exactly the given fields
    pub async fn partial_update(
        &self,
        entity_type: &str,
        id: &RecordId,
        fields: EntityRecord,
    ) -> Result<EntityRecord, RequestError> {
        let request = HttpRequest::new(HttpMethod::Patch, item_path(entity_type, id))
            .with_body(Value::Object(fields));
        self.fetch(request).await
    }

    /// `DELETE /{entity_type}/{id}`
    pub async fn delete(
        &self,
        entity_type: &str,
        id: &RecordId,
    ) -> Result<Acknowledgement, RequestError> {
        let request = HttpRequest::new(HttpMethod::Delete, item_path(entity_type, id));
        self.fetch(request).await
    }

    /// `PATCH /productos/{id}` setting the stock level
    pub async fn update_product_stock(
        &self,
        id: &RecordId,
        amount: i64,
    ) -> Result<EntityRecord, RequestError> {
        let mut fields = EntityRecord::new();
        fields.insert("stock".to_string(), json!(amount));
        self.partial_update(EntityKind::Productos.as_str(), id, fields)
            .await
    }

    /// `POST /pedidos/{id}/cancelar`
    pub async fn cancel_order(&self, id: &RecordId) -> Result<Acknowledgement, RequestError> {
        log::info!("Cancelando pedido {}", id);
        self.transition(EntityKind::Pedidos, id, "cancelar").await
    }

    /// `POST /ventas/{id}/cancelar`
    pub async fn cancel_sale(&self, id: &RecordId) -> Result<Acknowledgement, RequestError> {
        self.transition(EntityKind::Ventas, id, "cancelar").await
    }

    /// `POST /ordenes/{id}/cancelar`
    pub async fn cancel_purchase_order(
        &self,
        id: &RecordId,
    ) -> Result<Acknowledgement, RequestError> {
        self.transition(EntityKind::Ordenes, id, "cancelar").await
    }

    /// `POST /ordenes/{id}/recibir`
    pub async fn receive_purchase_order(
        &self,
        id: &RecordId,
    ) -> Result<Acknowledgement, RequestError> {
        self.transition(EntityKind::Ordenes, id, "recibir").await
    }

    /// Cancel transition of `kind`
    pub async fn cancel(
        &self,
        kind: EntityKind,
        id: &RecordId,
    ) -> Result<Acknowledgement, RequestError> {
        match kind {
            EntityKind::Pedidos => self.cancel_order(id).await,
            EntityKind::Ventas => self.cancel_sale(id).await,
            EntityKind::Ordenes => self.cancel_purchase_order(id).await,
            other => Err(RequestError::Unsupported(format!(
                "No se puede cancelar tipo: {}",
                other
            ))),
        }
    }

    async fn transition(
        &self,
        kind: EntityKind,
        id: &RecordId,
        action: &str,
    ) -> Result<Acknowledgement, RequestError> {
        let path = format!("{}/{}", item_path(kind.as_str(), id), action);
        let request = HttpRequest::new(HttpMethod::Post, path);
        self.fetch_logged(request, "Error en la transición").await
    }

    async fn fetch<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, RequestError> {
        let response = self.transport.send(request).await?;
        unwrap_response(response)
    }

    /// Like `fetch`, also logging the failed response body
    async fn fetch_logged<R: DeserializeOwned>(
        &self,
        request: HttpRequest,
        context: &str,
    ) -> Result<R, RequestError> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::warn!(
                "{}: {} {} - {}",
                context,
                response.status,
                response.status_text,
                response.body
            );
        }
        unwrap_response(response)
    }
}

fn collection_path(entity_type: &str) -> String {
    format!("/{}", entity_type)
}

fn item_path(entity_type: &str, id: &RecordId) -> String {
    format!(
        "/{}/{}",
        entity_type,
        urlencoding::encode(&id.as_path_text())
    )
}

/// Turn a response into the decoded body or the matching error.
///
/// An empty success body decodes as JSON `null`.
fn unwrap_response<R: DeserializeOwned>(response: HttpResponse) -> Result<R, RequestError> {
    if !response.is_success() {
        return Err(RequestError::from_response(&response));
    }
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(body).map_err(|e| RequestError::Decode(e.to_string()))
}
