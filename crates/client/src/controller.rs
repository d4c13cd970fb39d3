//! Local state for the portfolio page: the collection mirror, the
//! add-project form state machine, the delete confirmation gate, and the
//! notification queue.
//!
//! The controller performs no I/O. `submit` and `confirm_delete` return the
//! request the caller should perform against [`crate::api::ApiClient`]; the
//! caller then reports the outcome with `submit_succeeded`/`submit_failed`
//! and `delete_succeeded`/`delete_failed`. The mirror is only ever mutated
//! on a reported success, so a failed operation can never corrupt it.

use portfolio_core::category::Category;
use portfolio_core::project::{CreateProject, ProjectRecord};

use crate::api::ProjectCollections;

/// In-progress add-project form fields, category fixed for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub category: Category,
    pub title: String,
    pub description: String,
    /// Staged technology tags, deduplicated, in insertion order.
    pub tags: Vec<String>,
    pub project_link: String,
    pub download_link: String,
}

impl FormDraft {
    fn new(category: Category) -> Self {
        Self {
            category,
            title: String::new(),
            description: String::new(),
            tags: Vec::new(),
            project_link: String::new(),
            download_link: String::new(),
        }
    }

    /// Submittable once title and description are non-empty after trimming.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    fn to_payload(&self) -> CreateProject {
        CreateProject {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            technologies: self.tags.clone(),
            project_link: self.project_link.trim().to_string(),
            download_link: self.download_link.trim().to_string(),
        }
    }
}

/// State machine for the add-project flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    /// No form open.
    Idle,
    /// Operator is editing; staged state lives in the draft.
    Editing(FormDraft),
    /// A create request is in flight; resubmission is rejected.
    Submitting(FormDraft),
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient, user-visible notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// A delete awaiting explicit operator confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub category: Category,
    pub id: String,
}

/// Page-scoped client state. No globals: the embedding frontend owns one
/// instance for the lifetime of the page and re-renders from it.
#[derive(Debug, Default)]
pub struct Controller {
    collections: ProjectCollections,
    form: FormState,
    pending_delete: Option<PendingDelete>,
    notices: Vec<Notice>,
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Idle
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// The local mirror of both collections.
    pub fn collections(&self) -> &ProjectCollections {
        &self.collections
    }

    /// Current form state.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The delete awaiting confirmation, if any.
    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    /// Replace the mirror with a freshly fetched copy (after a list call).
    pub fn refresh(&mut self, collections: ProjectCollections) {
        self.collections = collections;
    }

    /// Drain queued notifications for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // -- Add-project form -------------------------------------------------

    /// Open the form for a category. Any previous editing session is
    /// discarded; ignored while a submission is in flight.
    pub fn open_form(&mut self, category: Category) {
        if matches!(self.form, FormState::Submitting(_)) {
            return;
        }
        self.form = FormState::Editing(FormDraft::new(category));
    }

    /// Close the form, discarding all staged state. Only valid while editing.
    pub fn cancel_form(&mut self) {
        if matches!(self.form, FormState::Editing(_)) {
            self.form = FormState::Idle;
        }
    }

    /// Mutable access to the draft while editing (text field changes).
    pub fn draft_mut(&mut self) -> Option<&mut FormDraft> {
        match &mut self.form {
            FormState::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// Stage a technology tag. Tags are trimmed and deduplicated; adding an
    /// already-present or blank tag is a no-op.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if let FormState::Editing(draft) = &mut self.form {
            if !draft.tags.iter().any(|t| t == tag) {
                draft.tags.push(tag.to_string());
            }
        }
    }

    /// Remove a staged tag.
    pub fn remove_tag(&mut self, tag: &str) {
        if let FormState::Editing(draft) = &mut self.form {
            draft.tags.retain(|t| t != tag);
        }
    }

    /// Attempt to submit the form.
    ///
    /// Returns the create request to send on success. Returns `None` and
    /// queues an error notice if required fields are blank; returns `None`
    /// silently when there is nothing to submit or a submission is already
    /// in flight (no double-submit).
    pub fn submit(&mut self) -> Option<(Category, CreateProject)> {
        match &self.form {
            FormState::Editing(draft) if draft.is_submittable() => {}
            FormState::Editing(_) => {
                self.push_notice(NoticeKind::Error, "Title and description are required");
                return None;
            }
            FormState::Idle | FormState::Submitting(_) => return None,
        }

        let FormState::Editing(draft) = std::mem::replace(&mut self.form, FormState::Idle) else {
            return None;
        };
        let request = (draft.category, draft.to_payload());
        self.form = FormState::Submitting(draft);
        Some(request)
    }

    /// Record a confirmed successful create: append to the mirror and close
    /// the form.
    pub fn submit_succeeded(&mut self, record: ProjectRecord) {
        if !matches!(self.form, FormState::Submitting(_)) {
            return;
        }
        let FormState::Submitting(draft) = std::mem::replace(&mut self.form, FormState::Idle)
        else {
            return;
        };
        self.collections.collection_mut(draft.category).push(record);
        self.push_notice(NoticeKind::Success, "Project added successfully");
    }

    /// Record a failed create: surface the error and return to editing with
    /// all input preserved.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        if matches!(self.form, FormState::Submitting(_)) {
            if let FormState::Submitting(draft) =
                std::mem::replace(&mut self.form, FormState::Idle)
            {
                self.form = FormState::Editing(draft);
            }
        }
        self.push_notice(NoticeKind::Error, message);
    }

    // -- Deletion ---------------------------------------------------------

    /// Stage a delete for operator confirmation. Replaces any earlier
    /// unconfirmed one.
    pub fn request_delete(&mut self, category: Category, id: impl Into<String>) {
        self.pending_delete = Some(PendingDelete {
            category,
            id: id.into(),
        });
    }

    /// Dismiss the pending delete without acting on it.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete, returning the request to send.
    pub fn confirm_delete(&mut self) -> Option<(Category, String)> {
        self.pending_delete
            .take()
            .map(|pending| (pending.category, pending.id))
    }

    /// Record a confirmed successful delete: drop the record from the mirror.
    pub fn delete_succeeded(&mut self, category: Category, id: &str) {
        self.collections
            .collection_mut(category)
            .retain(|record| record.id != id);
        self.push_notice(NoticeKind::Success, "Project deleted successfully");
    }

    /// Record a failed delete: the mirror is left untouched.
    pub fn delete_failed(&mut self, message: impl Into<String>) {
        self.push_notice(NoticeKind::Error, message);
    }

    fn push_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notices.push(Notice {
            kind,
            message: message.into(),
        });
    }
}
