//! Column derivation and cell formatting for the entity table

use contracts::enums::entity_kind::EntityKind;
use contracts::enums::record_status::{is_cancelled, is_pending, STATUS_FIELD};
use contracts::shared::record::EntityRecord;
use serde_json::{Number, Value};

use crate::shared::date_utils::format_date;

/// Audit columns the table never shows
const HIDDEN_COLUMNS: &[&str] = &["fecha_creacion", "fecha_registro"];

/// Prefix of internal keys the table never shows
const INTERNAL_PREFIX: &str = "__";

/// Substrings marking money columns
const CURRENCY_MARKERS: &[&str] = &["precio", "total"];

/// What the table shows for a list of records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableModel {
    /// No records: the "no data" notice and no table
    Empty,
    Rows { columns: Vec<String> },
}

impl TableModel {
    pub fn from_records(records: &[EntityRecord]) -> Self {
        if records.is_empty() {
            TableModel::Empty
        } else {
            TableModel::Rows {
                columns: derive_columns(records),
            }
        }
    }
}

/// Column keys taken from the first record, in its key order
pub fn derive_columns(records: &[EntityRecord]) -> Vec<String> {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    first
        .keys()
        .filter(|key| !HIDDEN_COLUMNS.contains(&key.as_str()))
        .filter(|key| !key.starts_with(INTERNAL_PREFIX))
        .cloned()
        .collect()
}

/// "id_producto" -> "Id producto"
pub fn column_header(column: &str) -> String {
    let spaced = column.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display text for a single value
pub fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::Bool(true)) => "Sí".to_string(),
        Some(Value::Bool(false)) => "No".to_string(),
        Some(Value::String(s)) => format_date(s).unwrap_or_else(|| s.clone()),
        Some(Value::Number(n)) => format_number(n),
        Some(other) => other.to_string(),
    }
}

/// Integral floats render without a fraction ("10.0" -> "10")
fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

pub fn is_currency_column(column: &str) -> bool {
    CURRENCY_MARKERS.iter().any(|marker| column.contains(marker))
}

/// Display text for `column`, money columns prefixed with `currency`
pub fn format_column_value(column: &str, value: Option<&Value>, currency: &str) -> String {
    let text = format_cell(value);
    if is_currency_column(column) {
        format!("{}{}", currency, text)
    } else {
        text
    }
}

/// Actions offered for one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub edit: bool,
    pub delete: bool,
    pub cancel: bool,
    pub receive: bool,
}

impl RowActions {
    pub fn for_record(kind: EntityKind, record: &EntityRecord) -> Self {
        let status = record.get(STATUS_FIELD).and_then(Value::as_str);
        Self {
            edit: true,
            delete: true,
            cancel: kind.supports_cancel() && !status.map(is_cancelled).unwrap_or(false),
            receive: kind.supports_receive() && status.map(is_pending).unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> EntityRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_list_has_no_columns() {
        assert!(derive_columns(&[]).is_empty());
    }

    #[test]
    fn test_empty_list_renders_no_data_state() {
        assert_eq!(TableModel::from_records(&[]), TableModel::Empty);
    }

    #[test]
    fn test_records_render_table_with_columns() {
        let records = vec![record(json!({"id_venta": 1, "estado": "pendiente", "fecha_registro": "x"}))];
        assert_eq!(
            TableModel::from_records(&records),
            TableModel::Rows {
                columns: vec!["id_venta".to_string(), "estado".to_string()]
            }
        );
    }

    #[test]
    fn test_columns_follow_first_record_and_skip_audit_fields() {
        let records = vec![
            record(json!({
                "id_producto": 1,
                "nombre": "A",
                "fecha_creacion": "2024-01-01",
                "__typename": "x",
                "precio": 3
            })),
            record(json!({"otro": 1})),
        ];
        assert_eq!(derive_columns(&records), vec!["id_producto", "nombre", "precio"]);

        let suppliers = vec![record(json!({"id_proveedor": 1, "fecha_registro": "2024-01-01"}))];
        assert_eq!(derive_columns(&suppliers), vec!["id_proveedor"]);
    }

    #[test]
    fn test_column_header() {
        assert_eq!(column_header("id_producto"), "Id producto");
        assert_eq!(column_header("estado"), "Estado");
        assert_eq!(column_header("órden"), "Órden");
        assert_eq!(column_header(""), "");
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(None), "-");
        assert_eq!(format_cell(Some(&Value::Null)), "-");
        assert_eq!(format_cell(Some(&json!(true))), "Sí");
        assert_eq!(format_cell(Some(&json!(false))), "No");
        assert_eq!(format_cell(Some(&json!(12.5))), "12.5");
        assert_eq!(format_cell(Some(&json!(10.0))), "10");
        assert_eq!(format_cell(Some(&json!(-7))), "-7");
        assert_eq!(format_cell(Some(&json!("2024-03-15T10:00:00Z"))), "15/03/2024");
        assert_eq!(format_cell(Some(&json!("pendiente"))), "pendiente");
        assert_eq!(format_cell(Some(&json!([1, 2]))), "[1,2]");
        assert_eq!(format_cell(Some(&json!({"a": 1}))), "{\"a\":1}");
    }

    #[test]
    fn test_currency_prefix() {
        assert_eq!(format_column_value("precio", Some(&json!(10)), "$"), "$10");
        assert_eq!(format_column_value("total", Some(&json!(5.5)), "$"), "$5.5");
        assert_eq!(format_column_value("precio_unitario", Some(&json!(1)), "$"), "$1");
        assert_eq!(format_column_value("total", None, "$"), "$-");
        assert_eq!(format_column_value("precio", Some(&Value::Null), "$"), "$-");
        assert_eq!(format_column_value("nombre", Some(&json!("x")), "$"), "x");
    }

    #[test]
    fn test_receive_only_for_pending_purchase_orders() {
        let pending = record(json!({"id_orden_proveedor": 1, "estado": "pendiente"}));
        let received = record(json!({"id_orden_proveedor": 2, "estado": "recibida"}));

        let actions = RowActions::for_record(EntityKind::Ordenes, &pending);
        assert!(actions.receive);
        assert!(actions.cancel);

        let actions = RowActions::for_record(EntityKind::Ordenes, &received);
        assert!(!actions.receive);
        assert!(actions.cancel);
    }

    #[test]
    fn test_cancel_hidden_for_cancelled_and_plain_types() {
        let cancelled = record(json!({"id_pedido": 1, "estado": "cancelado"}));
        let actions = RowActions::for_record(EntityKind::Pedidos, &cancelled);
        assert!(!actions.cancel);
        assert!(actions.edit && actions.delete);

        let sale = record(json!({"id_venta": 1, "estado": "cancelada"}));
        assert!(!RowActions::for_record(EntityKind::Ventas, &sale).cancel);

        let product = record(json!({"id_producto": 1}));
        let actions = RowActions::for_record(EntityKind::Productos, &product);
        assert!(!actions.cancel && !actions.receive);

        let pending_sale = record(json!({"id_venta": 2, "estado": "pendiente"}));
        let actions = RowActions::for_record(EntityKind::Ventas, &pending_sale);
        assert!(actions.cancel && !actions.receive);
    }
}
