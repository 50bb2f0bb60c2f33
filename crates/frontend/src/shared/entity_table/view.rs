use contracts::enums::entity_kind::EntityKind;
use contracts::enums::record_status::STATUS_FIELD;
use contracts::shared::record::{EntityRecord, RecordId};
use leptos::prelude::*;
use serde_json::Value;

use super::columns::{column_header, format_column_value, RowActions, TableModel};
use crate::shared::components::ui::{Button, ButtonVariant, StatusBadge};
use crate::shared::config::config;
use crate::shared::icons::icon;

/// Table of records with per-row actions
#[component]
pub fn EntityTable(
    #[prop(into)] records: Signal<Vec<EntityRecord>>,
    #[prop(into)] entity_type: Signal<EntityKind>,
    /// Disables every action button (request in flight)
    #[prop(into)]
    disabled: Signal<bool>,
    on_edit: Callback<EntityRecord>,
    on_delete: Callback<RecordId>,
    on_cancel: Callback<RecordId>,
    on_receive: Callback<RecordId>,
) -> impl IntoView {
    move || {
        let records = records.get();
        let columns = match TableModel::from_records(&records) {
            TableModel::Empty => {
                return view! {
                    <div class="table__empty">"No hay datos disponibles."</div>
                }
                .into_any();
            }
            TableModel::Rows { columns } => columns,
        };

        let kind = entity_type.get();
        let id_field = kind.id_field();
        let currency = config().ui.currency_symbol.as_str();

        let header = columns
            .iter()
            .map(|column| view! { <th class="table__header-cell">{column_header(column)}</th> })
            .collect_view();

        let rows = records
            .into_iter()
            .map(|record| {
                let actions = RowActions::for_record(kind, &record);
                let id = RecordId::of(&record, id_field);
                let data_id = id.as_ref().map(|id| id.to_string());

                let cells = columns
                    .iter()
                    .map(|column| {
                        let value = record.get(column.as_str());
                        match (column.as_str(), value) {
                            (STATUS_FIELD, Some(Value::String(status))) => view! {
                                <td class="table__cell">
                                    <StatusBadge status=status.clone() />
                                </td>
                            }
                            .into_any(),
                            _ => view! {
                                <td class="table__cell">
                                    {format_column_value(column, value, currency)}
                                </td>
                            }
                            .into_any(),
                        }
                    })
                    .collect_view();

                let action_buttons = row_buttons(
                    actions,
                    record.clone(),
                    id,
                    disabled,
                    on_edit,
                    on_delete,
                    on_cancel,
                    on_receive,
                );

                view! {
                    <tr class="table__row" data-id=data_id>
                        {cells}
                        <td class="table__cell table__cell--actions">{action_buttons}</td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {header}
                            <th class="table__header-cell">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        }
        .into_any()
    }
}

#[allow(clippy::too_many_arguments)]
fn row_buttons(
    actions: RowActions,
    record: EntityRecord,
    id: Option<RecordId>,
    disabled: Signal<bool>,
    on_edit: Callback<EntityRecord>,
    on_delete: Callback<RecordId>,
    on_cancel: Callback<RecordId>,
    on_receive: Callback<RecordId>,
) -> impl IntoView {
    // Rows without an identifier can only be opened for editing
    let with_id = move |callback: Callback<RecordId>, id: Option<RecordId>| {
        Callback::new(move |_: leptos::ev::MouseEvent| {
            if let Some(id) = id.clone() {
                callback.run(id);
            }
        })
    };

    let edit = actions.edit.then(|| {
        view! {
            <Button
                variant=ButtonVariant::Ghost
                compact=true
                title="Editar"
                disabled=disabled
                on_click=Callback::new(move |_: leptos::ev::MouseEvent| on_edit.run(record.clone()))
            >
                {icon("edit")}
            </Button>
        }
    });
    let delete = actions.delete.then(|| {
        view! {
            <Button
                variant=ButtonVariant::Danger
                compact=true
                title="Eliminar"
                disabled=disabled
                on_click=with_id(on_delete, id.clone())
            >
                {icon("delete")}
            </Button>
        }
    });
    let cancel = actions.cancel.then(|| {
        view! {
            <Button
                variant=ButtonVariant::Secondary
                compact=true
                title="Cancelar"
                disabled=disabled
                on_click=with_id(on_cancel, id.clone())
            >
                {icon("x-circle")}
            </Button>
        }
    });
    let receive = actions.receive.then(|| {
        view! {
            <Button
                variant=ButtonVariant::Primary
                compact=true
                title="Recibir"
                disabled=disabled
                on_click=with_id(on_receive, id.clone())
            >
                {icon("check")}
            </Button>
        }
    });

    view! {
        <div class="table__actions">
            {edit}
            {delete}
            {cancel}
            {receive}
        </div>
    }
}
