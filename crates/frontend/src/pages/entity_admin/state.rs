use contracts::enums::entity_kind::EntityKind;
use contracts::shared::record::{EntityRecord, RecordId};
use leptos::prelude::*;
use std::cell::RefCell;
use std::fmt::Display;

/// Everything the admin page shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    pub entity_type: EntityKind,
    pub records: Vec<EntityRecord>,
    /// Record open in the form, `None` while creating
    pub edit_target: Option<EntityRecord>,
    /// A request is in flight; disables every control
    pub loading: bool,
    pub error: Option<String>,
    /// Success message of the last transition
    pub notice: Option<String>,
    /// Bumped on every new notice so stale dismissals can be ignored
    pub notice_id: u64,
}

impl AdminState {
    pub fn new(entity_type: EntityKind) -> Self {
        Self {
            entity_type,
            ..Self::default()
        }
    }

    pub fn id_field(&self) -> &'static str {
        self.entity_type.id_field()
    }

    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_request(&mut self) {
        self.loading = false;
    }

    /// Store `err` prefixed with what was being done
    pub fn fail(&mut self, context: &str, err: impl Display) {
        self.error = Some(format!("{}: {}", context, err));
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice_id += 1;
        self.notice = Some(message.into());
    }

    /// Clear the notice only if it is still the one numbered `notice_id`
    pub fn dismiss_notice(&mut self, notice_id: u64) {
        if self.notice_id == notice_id {
            self.notice = None;
        }
    }

    /// Id of the notice on screen, if any
    pub fn active_notice(&self) -> Option<u64> {
        self.notice.as_ref().map(|_| self.notice_id)
    }

    pub fn replace_records(&mut self, records: Vec<EntityRecord>) {
        self.records = records;
    }

    pub fn append_record(&mut self, record: EntityRecord) {
        self.records.push(record);
    }

    /// Swap the record carrying `id` for `updated`, keeping its position
    pub fn replace_record(&mut self, id: &RecordId, updated: EntityRecord) {
        let id_field = self.id_field();
        if let Some(slot) = self.records.iter_mut().find(|r| id.matches(r, id_field)) {
            *slot = updated;
        }
    }

    pub fn remove_record(&mut self, id: &RecordId) {
        let id_field = self.id_field();
        self.records.retain(|r| !id.matches(r, id_field));
    }
}

/// Where the controller keeps [`AdminState`]
///
/// The page uses a signal; tests use a plain `RefCell`.
pub trait StateStore {
    fn read<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut AdminState));
}

impl StateStore for RwSignal<AdminState> {
    fn read<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut AdminState)) {
        self.update(f);
    }
}

impl StateStore for RefCell<AdminState> {
    fn read<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut AdminState)) {
        f(&mut self.borrow_mut());
    }
}

pub fn create_state(entity_type: EntityKind) -> RwSignal<AdminState> {
    RwSignal::new(AdminState::new(entity_type))
}
