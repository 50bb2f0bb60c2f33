use serde::{Deserialize, Serialize};

use crate::domain::{
    a001_producto, a002_proveedor, a003_pedido, a004_venta, a005_orden_proveedor,
};
use crate::shared::metadata::EntitySchema;

/// Entity types managed by the admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[default]
    Productos,
    Proveedores,
    Pedidos,
    Ventas,
    Ordenes,
}

impl EntityKind {
    /// Collection name, also the REST path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Productos => "productos",
            EntityKind::Proveedores => "proveedores",
            EntityKind::Pedidos => "pedidos",
            EntityKind::Ventas => "ventas",
            EntityKind::Ordenes => "ordenes",
        }
    }

    /// Parse a collection name
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "productos" => Some(EntityKind::Productos),
            "proveedores" => Some(EntityKind::Proveedores),
            "pedidos" => Some(EntityKind::Pedidos),
            "ventas" => Some(EntityKind::Ventas),
            "ordenes" => Some(EntityKind::Ordenes),
            _ => None,
        }
    }

    /// All entity types in menu order
    pub fn all() -> Vec<EntityKind> {
        vec![
            EntityKind::Productos,
            EntityKind::Proveedores,
            EntityKind::Pedidos,
            EntityKind::Ventas,
            EntityKind::Ordenes,
        ]
    }

    pub fn schema(&self) -> &'static EntitySchema {
        match self {
            EntityKind::Productos => &a001_producto::SCHEMA,
            EntityKind::Proveedores => &a002_proveedor::SCHEMA,
            EntityKind::Pedidos => &a003_pedido::SCHEMA,
            EntityKind::Ventas => &a004_venta::SCHEMA,
            EntityKind::Ordenes => &a005_orden_proveedor::SCHEMA,
        }
    }

    /// Capitalised plural for menus and headings
    pub fn display_name(&self) -> &'static str {
        self.schema().ui.list_name
    }

    /// Lower-case singular used in prompts ("¿... cancelar este pedido?")
    pub fn element_name(&self) -> &'static str {
        self.schema().ui.element_name
    }

    pub fn id_field(&self) -> &'static str {
        self.schema().id_field
    }

    /// Orders, sales and purchase orders have a cancel transition
    pub fn supports_cancel(&self) -> bool {
        matches!(
            self,
            EntityKind::Pedidos | EntityKind::Ventas | EntityKind::Ordenes
        )
    }

    /// Only purchase orders can be received
    pub fn supports_receive(&self) -> bool {
        matches!(self, EntityKind::Ordenes)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for kind in EntityKind::all() {
            assert_eq!(EntityKind::from_code(kind.as_str()), Some(kind));
        }
        assert_eq!(EntityKind::from_code("clientes"), None);
    }

    #[test]
    fn transitions_per_kind() {
        assert!(!EntityKind::Productos.supports_cancel());
        assert!(!EntityKind::Proveedores.supports_cancel());
        assert!(EntityKind::Pedidos.supports_cancel());
        assert!(EntityKind::Ventas.supports_cancel());
        assert!(EntityKind::Ordenes.supports_cancel());
        assert!(EntityKind::Ordenes.supports_receive());
        assert!(!EntityKind::Pedidos.supports_receive());
    }

    #[test]
    fn serializes_as_collection_name() {
        assert_eq!(
            serde_json::to_string(&EntityKind::Ordenes).unwrap(),
            "\"ordenes\""
        );
    }
}
