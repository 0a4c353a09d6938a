//! Generic list + edit dialog + delete confirmation state
//!
//! Every admin screen is the same machine instantiated for a different
//! [`AdminResource`]. Network calls are split into `begin_*` / `finish_*`
//! pairs so a UI can release its state between the two halves; see
//! [`CrudManager`] for the same flow driven end to end.

use std::collections::BTreeMap;
use std::fmt::Display;

use tracing::{debug, warn};

use crate::error::ValidationErrors;
use crate::notify::Notifications;
use crate::resource::{capitalize, AdminResource, FieldValue, ResourceBackend};

/// Identifies one list fetch. Completions carrying an older ticket are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Identifies the dialog a save was started from. A save that finishes
/// after its dialog was closed or replaced leaves the current one alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket(u64);

/// What the backend should be asked to do with the edit-buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest<R> {
    Create(R),
    Update(i64, R),
}

impl<R> SaveRequest<R> {
    pub fn record(&self) -> &R {
        match self {
            SaveRequest::Create(record) | SaveRequest::Update(_, record) => record,
        }
    }
}

/// Unsaved copy of a record plus the raw text of every form control.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer<R> {
    original: R,
    drafts: BTreeMap<&'static str, FieldValue>,
    errors: ValidationErrors,
}

impl<R: AdminResource> EditBuffer<R> {
    pub fn new(record: R) -> Self {
        let drafts = R::fields()
            .iter()
            .map(|field| (field.key, record.field_value(field.key)))
            .collect();

        Self {
            original: record,
            drafts,
            errors: ValidationErrors::new(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.original.id()
    }

    pub fn is_new(&self) -> bool {
        self.id().is_none()
    }

    pub fn value(&self, key: &str) -> FieldValue {
        self.drafts
            .get(key)
            .cloned()
            .unwrap_or_else(|| self.original.field_value(key))
    }

    pub fn set(&mut self, key: &'static str, value: FieldValue) {
        self.errors.remove(key);
        self.drafts.insert(key, value);
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Apply every draft to a copy of the original and validate the result.
    pub fn record(&self) -> Result<R, ValidationErrors> {
        let mut record = self.original.clone();
        let mut errors = ValidationErrors::new();

        for field in R::fields() {
            if let Some(value) = self.drafts.get(field.key) {
                if let Err(message) = record.set_field(field.key, value) {
                    errors.add(field.key, message);
                }
            }
        }

        if let Err(invalid) = record.validate() {
            for (field, message) in invalid.iter() {
                errors.add(field, message);
            }
        }

        errors.into_result().map(|_| record)
    }

    /// [`record`](Self::record), keeping any errors for display.
    pub fn check(&mut self) -> Option<R> {
        match self.record() {
            Ok(record) => {
                self.errors = ValidationErrors::new();
                Some(record)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

/// UI state of one resource manager.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerState<R> {
    items: Vec<R>,
    loading: bool,
    loaded: bool,
    generation: u64,
    dialog: u64,
    editor: Option<EditBuffer<R>>,
    saving: bool,
    pending_delete: Option<i64>,
    deleting: bool,
    notifications: Notifications,
}

impl<R: AdminResource> Default for ManagerState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AdminResource> ManagerState<R> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            loaded: false,
            generation: 0,
            dialog: 0,
            editor: None,
            saving: false,
            pending_delete: None,
            deleting: false,
            notifications: Notifications::new(),
        }
    }

    // ------------------------------------------------------------------
    // List
    // ------------------------------------------------------------------

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Returns false when the result belonged to a superseded fetch and was
    /// ignored.
    pub fn finish_load<E: Display>(&mut self, ticket: LoadTicket, result: Result<Vec<R>, E>) -> bool {
        if ticket.0 != self.generation {
            debug!(resource = R::PLURAL, "ignoring stale list response");
            return false;
        }

        self.loading = false;
        self.loaded = true;

        match result {
            Ok(items) => self.items = items,
            Err(err) => {
                warn!(resource = R::PLURAL, error = %err, "list fetch failed");
                self.items.clear();
                self.notifications.error(format!("Failed to fetch {}", R::PLURAL));
            }
        }
        true
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A completed fetch returned nothing: render "no records", not an
    /// empty table.
    pub fn shows_empty_state(&self) -> bool {
        self.loaded && !self.loading && self.items.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&R> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    // ------------------------------------------------------------------
    // Edit dialog
    // ------------------------------------------------------------------

    pub fn open_create(&mut self) -> bool {
        if !R::CAPABILITIES.create {
            return false;
        }
        self.show_editor(Some(EditBuffer::new(R::blank())));
        true
    }

    /// Open the dialog on a copy of the listed record.
    pub fn open_edit(&mut self, id: i64) -> bool {
        if !R::CAPABILITIES.edit {
            return false;
        }
        match self.find(id).cloned() {
            Some(record) => {
                self.show_editor(Some(EditBuffer::new(record)));
                true
            }
            None => false,
        }
    }

    pub fn close_editor(&mut self) {
        self.show_editor(None);
    }

    fn show_editor(&mut self, editor: Option<EditBuffer<R>>) {
        self.dialog += 1;
        self.editor = editor;
    }

    pub fn editor(&self) -> Option<&EditBuffer<R>> {
        self.editor.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn set_field(&mut self, key: &'static str, value: FieldValue) {
        if let Some(editor) = self.editor.as_mut() {
            editor.set(key, value);
        }
    }

    /// Validate the edit-buffer and hand back the call to make. `None` while
    /// another save is in flight or when validation failed.
    pub fn begin_save(&mut self) -> Option<(SaveTicket, SaveRequest<R>)> {
        if self.saving {
            return None;
        }
        let editor = self.editor.as_mut()?;

        let Some(record) = editor.check() else {
            self.notifications
                .error("Please correct the highlighted fields");
            return None;
        };
        let request = match record.id() {
            Some(id) if R::CAPABILITIES.edit => SaveRequest::Update(id, record),
            None if R::CAPABILITIES.create => SaveRequest::Create(record),
            _ => return None,
        };
        self.saving = true;
        Some((SaveTicket(self.dialog), request))
    }

    /// Returns true when the list should be re-fetched. The dialog closes
    /// only if it is still the one the save came from.
    pub fn finish_save<E: Display>(&mut self, ticket: SaveTicket, result: Result<(), E>) -> bool {
        self.saving = false;
        match result {
            Ok(()) => {
                if ticket.0 == self.dialog {
                    self.show_editor(None);
                } else {
                    debug!(resource = R::PLURAL, "save finished after its dialog closed");
                }
                self.notifications
                    .success(format!("{} saved successfully", capitalize(R::SINGULAR)));
                true
            }
            Err(err) => {
                self.notifications
                    .error(format!("Failed to save {}: {}", R::SINGULAR, err));
                false
            }
        }
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Ask for confirmation. Nothing is sent until [`Self::begin_delete`].
    pub fn request_delete(&mut self, id: i64) -> bool {
        if !R::CAPABILITIES.delete || self.deleting {
            return false;
        }
        self.pending_delete = Some(id);
        true
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Title of the record awaiting confirmation, for the prompt.
    pub fn pending_delete_title(&self) -> Option<String> {
        let id = self.pending_delete?;
        Some(
            self.find(id)
                .map(AdminResource::title)
                .unwrap_or_else(|| format!("#{id}")),
        )
    }

    /// The user confirmed; returns the id to delete.
    pub fn begin_delete(&mut self) -> Option<i64> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete.take()?;
        self.deleting = true;
        Some(id)
    }

    /// Returns true when the list should be re-fetched.
    pub fn finish_delete<E: Display>(&mut self, id: i64, result: Result<(), E>) -> bool {
        self.deleting = false;
        match result {
            Ok(()) => {
                debug!(resource = R::PLURAL, id, "deleted");
                self.notifications
                    .success(format!("{} deleted successfully", capitalize(R::SINGULAR)));
                true
            }
            Err(err) => {
                self.notifications
                    .error(format!("Failed to delete {}: {}", R::SINGULAR, err));
                false
            }
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }
}

/// Drives a [`ManagerState`] against a [`ResourceBackend`], re-fetching the
/// list after every successful mutation.
pub struct CrudManager<R, B> {
    state: ManagerState<R>,
    backend: B,
}

impl<R, B> CrudManager<R, B>
where
    R: AdminResource,
    B: ResourceBackend<R>,
{
    pub fn new(backend: B) -> Self {
        Self {
            state: ManagerState::new(),
            backend,
        }
    }

    pub fn state(&self) -> &ManagerState<R> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ManagerState<R> {
        &mut self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn refresh(&mut self) {
        let ticket = self.state.begin_load();
        let result = self.backend.list().await;
        self.state.finish_load(ticket, result);
    }

    /// Returns true when the record was saved.
    pub async fn save(&mut self) -> bool {
        let Some((ticket, request)) = self.state.begin_save() else {
            return false;
        };

        let result = match &request {
            SaveRequest::Create(record) => self.backend.create(record).await,
            SaveRequest::Update(id, record) => self.backend.update(*id, record).await,
        };

        let saved = self.state.finish_save(ticket, result);
        if saved {
            self.refresh().await;
        }
        saved
    }

    /// Delete the record awaiting confirmation. Returns true on success.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.state.begin_delete() else {
            return false;
        };

        let result = self.backend.delete(id).await;
        let deleted = self.state.finish_delete(id, result);
        if deleted {
            self.refresh().await;
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{Application, Package, Teacher};
    use crate::notify::NotificationKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Backend that keeps records in memory and echoes them unchanged.
    struct MemoryBackend<R> {
        records: Mutex<Vec<R>>,
        next_id: Mutex<i64>,
        list_calls: AtomicUsize,
        fail_writes: Mutex<Option<ApiError>>,
    }

    impl<R: AdminResource> MemoryBackend<R> {
        fn new(records: Vec<R>) -> Self {
            Self {
                records: Mutex::new(records),
                next_id: Mutex::new(100),
                list_calls: AtomicUsize::new(0),
                fail_writes: Mutex::new(None),
            }
        }

        fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        fn fail_writes_with(&self, err: ApiError) {
            *self.fail_writes.lock().unwrap() = Some(err);
        }

        fn check_writes(&self) -> Result<(), ApiError> {
            match self.fail_writes.lock().unwrap().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl<R: AdminResource> ResourceBackend<R> for MemoryBackend<R> {
        async fn list(&self) -> Result<Vec<R>, ApiError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.lock().unwrap().clone())
        }

        async fn create(&self, record: &R) -> Result<(), ApiError> {
            self.check_writes()?;
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let mut value = serde_json::to_value(record).unwrap();
            value["id"] = serde_json::json!(*next_id);
            self.records
                .lock()
                .unwrap()
                .push(serde_json::from_value(value).unwrap());
            Ok(())
        }

        async fn update(&self, id: i64, record: &R) -> Result<(), ApiError> {
            self.check_writes()?;
            let mut records = self.records.lock().unwrap();
            match records.iter_mut().find(|r| r.id() == Some(id)) {
                Some(existing) => {
                    *existing = record.clone();
                    Ok(())
                }
                None => Err(ApiError::NotFound),
            }
        }

        async fn delete(&self, id: i64) -> Result<(), ApiError> {
            self.check_writes()?;
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.id() != Some(id));
            if records.len() == before {
                Err(ApiError::NotFound)
            } else {
                Ok(())
            }
        }
    }

    fn package(id: i64, name: &str) -> Package {
        Package {
            id: Some(id),
            name: name.to_string(),
            description: format!("{name} course"),
            price: 20.0,
            ..Package::blank()
        }
    }

    fn teacher(id: i64, name: &str) -> Teacher {
        Teacher {
            id: Some(id),
            name: name.to_string(),
            title: "Quran teacher".to_string(),
            ..Teacher::blank()
        }
    }

    #[test]
    fn test_check_keeps_errors_until_fixed() {
        let mut buffer = EditBuffer::new(Package::blank());
        assert!(buffer.check().is_none());
        assert_eq!(buffer.errors().get("name"), Some("Name is required"));

        buffer.set("name", FieldValue::text("Qaida"));
        assert!(buffer.errors().get("name").is_none());
        buffer.set("description", FieldValue::text("Arabic letters"));
        buffer.set("price", FieldValue::text("15"));

        let record = buffer.check().unwrap();
        assert_eq!(record.price, 15.0);
        assert!(buffer.errors().is_empty());
    }

    #[tokio::test]
    async fn test_edit_buffer_is_a_copy() {
        let mut manager = CrudManager::new(MemoryBackend::new(vec![package(1, "Tajweed")]));
        manager.refresh().await;

        assert!(manager.state_mut().open_edit(1));
        manager
            .state_mut()
            .set_field("name", FieldValue::text("Changed"));

        assert_eq!(manager.state().items()[0].name, "Tajweed");
        assert_eq!(
            manager.state().editor().unwrap().value("name"),
            FieldValue::text("Changed")
        );
    }

    #[tokio::test]
    async fn test_successful_save_closes_dialog_and_refetches_once() {
        let mut manager = CrudManager::new(MemoryBackend::new(vec![package(1, "Tajweed")]));
        manager.refresh().await;
        let calls_before = manager.backend().list_calls();

        manager.state_mut().open_edit(1);
        manager
            .state_mut()
            .set_field("name", FieldValue::text("Tajweed Plus"));
        assert!(manager.save().await);

        assert!(!manager.state().is_editing());
        assert_eq!(manager.backend().list_calls(), calls_before + 1);
        assert_eq!(manager.state().items()[0].name, "Tajweed Plus");

        let last = manager.state().notifications().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Success);
        assert_eq!(last.message, "Package saved successfully");
    }

    #[tokio::test]
    async fn test_failed_save_keeps_dialog_open_and_list_unchanged() {
        let mut manager = CrudManager::new(MemoryBackend::new(vec![package(1, "Tajweed")]));
        manager.refresh().await;
        let calls_before = manager.backend().list_calls();
        manager.backend().fail_writes_with(ApiError::Validation {
            message: "Name already exists".to_string(),
            fields: Default::default(),
        });

        manager.state_mut().open_edit(1);
        manager
            .state_mut()
            .set_field("name", FieldValue::text("Duplicate"));
        assert!(!manager.save().await);

        assert!(manager.state().is_editing());
        assert!(!manager.state().is_saving());
        assert_eq!(manager.backend().list_calls(), calls_before);
        assert_eq!(manager.state().items()[0].name, "Tajweed");
        assert_eq!(
            manager.state().notifications().last().unwrap().message,
            "Failed to save package: Name already exists"
        );
    }

    #[tokio::test]
    async fn test_created_record_lists_with_submitted_values() {
        let mut manager = CrudManager::new(MemoryBackend::<Package>::new(Vec::new()));
        manager.refresh().await;
        assert!(manager.state().shows_empty_state());

        manager.state_mut().open_create();
        let state = manager.state_mut();
        state.set_field("name", FieldValue::text("X"));
        state.set_field("description", FieldValue::text("Beginner course"));
        state.set_field("price", FieldValue::text("10"));
        state.set_field("is_active", FieldValue::Bool(true));
        assert!(manager.save().await);

        let items = manager.state().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "X");
        assert_eq!(items[0].price, 10.0);
        assert!(items[0].is_active);
        assert_eq!(items[0].cells()[1], "$10.00");
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_backend() {
        let mut manager = CrudManager::new(MemoryBackend::<Package>::new(Vec::new()));
        manager.refresh().await;

        manager.state_mut().open_create();
        manager
            .state_mut()
            .set_field("price", FieldValue::text("ten dollars"));
        assert!(!manager.save().await);

        let editor = manager.state().editor().unwrap();
        assert_eq!(
            editor.errors().get("price"),
            Some("Price must be a non-negative number")
        );
        assert_eq!(editor.errors().get("name"), Some("Name is required"));
        assert!(manager.backend().records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_waits_for_confirmation() {
        let mut manager = CrudManager::new(MemoryBackend::new(vec![
            teacher(1, "Sheikh Ahmad"),
            teacher(2, "Ustadha Maryam"),
        ]));
        manager.refresh().await;

        assert!(manager.state_mut().request_delete(2));
        assert_eq!(
            manager.state().pending_delete_title().as_deref(),
            Some("Ustadha Maryam")
        );
        assert_eq!(manager.backend().records.lock().unwrap().len(), 2);

        manager.state_mut().cancel_delete();
        assert!(!manager.confirm_delete().await);
        assert_eq!(manager.backend().records.lock().unwrap().len(), 2);

        manager.state_mut().request_delete(2);
        assert!(manager.confirm_delete().await);

        assert!(manager.state().find(2).is_none());
        assert_eq!(
            manager.state().notifications().last().unwrap().message,
            "Teacher deleted successfully"
        );
    }

    #[tokio::test]
    async fn test_deleting_missing_record_reports_failure() {
        let mut manager = CrudManager::new(MemoryBackend::new(vec![teacher(1, "Sheikh Ahmad")]));
        manager.refresh().await;

        manager.state_mut().request_delete(1);
        assert!(manager.confirm_delete().await);

        manager.state_mut().request_delete(1);
        assert!(!manager.confirm_delete().await);
        let last = manager.state().notifications().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Error);
        assert_eq!(last.message, "Failed to delete teacher: Not found");
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut state = ManagerState::<Package>::new();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.finish_load::<ApiError>(second, Ok(vec![package(2, "Hifz")])));
        assert!(!state.finish_load::<ApiError>(first, Ok(vec![package(1, "Old")])));

        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].name, "Hifz");
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_load_empties_list_and_notifies() {
        let mut state = ManagerState::<Package>::new();
        let ticket = state.begin_load();
        state.finish_load::<ApiError>(ticket, Ok(vec![package(1, "Tajweed")]));

        let ticket = state.begin_load();
        state.finish_load(ticket, Err(ApiError::Network("connection refused".to_string())));

        assert!(state.items().is_empty());
        assert_eq!(
            state.notifications().last().unwrap().message,
            "Failed to fetch packages"
        );
    }

    #[test]
    fn test_read_only_resources_refuse_edits() {
        let mut state = ManagerState::<Application>::new();
        let ticket = state.begin_load();
        state.finish_load::<ApiError>(
            ticket,
            Ok(vec![Application {
                id: Some(5),
                applicant_name: "Amina".to_string(),
                ..Application::default()
            }]),
        );

        assert!(!state.open_create());
        assert!(!state.open_edit(5));
        assert!(state.request_delete(5));
    }

    #[test]
    fn test_second_save_blocked_while_saving() {
        let mut state = ManagerState::<Package>::new();
        state.open_create();
        state.set_field("name", FieldValue::text("Tajweed"));
        state.set_field("description", FieldValue::text("Rules"));
        state.set_field("price", FieldValue::text("12"));

        let (ticket, request) = state.begin_save().unwrap();
        assert!(matches!(request, SaveRequest::Create(_)));
        assert!(state.begin_save().is_none());

        assert!(!state.finish_save(ticket, Err("boom")));
        assert!(state.begin_save().is_some());
    }

    #[test]
    fn test_late_save_leaves_newer_dialog_open() {
        let mut state = ManagerState::<Package>::new();
        let load = state.begin_load();
        state.finish_load(load, Ok::<_, String>(vec![package(1, "Tajweed"), package(2, "Hifz")]));
        state.open_edit(1);
        state.set_field("name", FieldValue::text("Tajweed Plus"));
        let (ticket, _) = state.begin_save().unwrap();

        // The user gives up waiting and opens another record
        state.close_editor();
        assert!(state.open_edit(2));

        assert!(state.finish_save(ticket, Ok::<(), String>(())));
        assert_eq!(state.editor().and_then(EditBuffer::id), Some(2));
        assert_eq!(
            state.notifications().last().unwrap().message,
            "Package saved successfully"
        );
    }

    #[test]
    fn test_save_closes_its_own_dialog() {
        let mut state = ManagerState::<Package>::new();
        state.open_create();
        state.set_field("name", FieldValue::text("Qaida"));
        state.set_field("description", FieldValue::text("Letters"));
        state.set_field("price", FieldValue::text("20"));
        let (ticket, _) = state.begin_save().unwrap();

        assert!(state.finish_save(ticket, Ok::<(), String>(())));
        assert!(!state.is_editing());
    }
}
