use crate::console_debug;
use crate::schema::RecordSchema;

use super::confirm::ConfirmPrompt;
use super::types::*;

/// Record list plus the single active draft for one registry
#[derive(Clone, PartialEq, Debug)]
pub struct RecordListEditor {
    schema: RecordSchema,
    /// Newest first
    records: Vec<Record>,
    draft: Draft,
}

impl RecordListEditor {
    pub fn new(schema: RecordSchema) -> Self {
        let draft = Draft::empty(&schema);
        Self {
            schema,
            records: Vec::new(),
            draft,
        }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_editing()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Label for the form's submit button in the current mode
    pub fn submit_label(&self) -> &str {
        if self.is_editing() {
            &self.schema.labels.update
        } else {
            &self.schema.labels.add
        }
    }

    /// Set one draft field. Names outside the schema are ignored.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> EditOutcome {
        match self.draft.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                EditOutcome::FieldUpdated
            }
            None => {
                console_debug!(
                    "[Editor:{}] Ignoring unknown field '{}'",
                    self.schema.entity,
                    name
                );
                EditOutcome::FieldIgnored
            }
        }
    }

    pub fn reset_draft(&mut self) -> EditOutcome {
        self.draft = Draft::empty(&self.schema);
        EditOutcome::DraftReset
    }

    /// Commit the draft: prepend in create mode, replace in place in edit mode.
    pub fn submit(&mut self) -> EditOutcome {
        let values = std::mem::take(&mut self.draft.values);

        let outcome = match self.draft.id {
            None => {
                let id = self.fresh_id();
                self.records.insert(0, Record { id, values });
                EditOutcome::Created(id)
            }
            Some(id) => match self.position(id) {
                Some(index) => {
                    self.records[index] = Record { id, values };
                    EditOutcome::Updated(id)
                }
                None => EditOutcome::NotFound(id),
            },
        };

        self.reset_draft();
        outcome
    }

    /// Load a record into the draft. Unknown ids leave the state untouched.
    pub fn begin_edit(&mut self, id: RecordId) -> EditOutcome {
        match self.get(id).map(Draft::from_record) {
            Some(draft) => {
                self.draft = draft;
                EditOutcome::EditStarted(id)
            }
            None => EditOutcome::NotFound(id),
        }
    }

    /// Remove a record once the host confirms.
    ///
    /// The prompt is not shown for ids that are not in the list. Removing the
    /// record currently under edit also resets the draft, so the draft never
    /// points at a record that no longer exists.
    pub fn remove<P>(&mut self, id: RecordId, prompt: &P) -> EditOutcome
    where
        P: ConfirmPrompt + ?Sized,
    {
        let Some(index) = self.position(id) else {
            return EditOutcome::NotFound(id);
        };

        if !prompt.confirm(&self.schema.labels.confirm_remove) {
            return EditOutcome::RemovalDeclined(id);
        }

        self.records.remove(index);
        if self.draft.id == Some(id) {
            self.reset_draft();
        }
        EditOutcome::Removed(id)
    }

    /// Applies an action in place, preserving signal identity for dioxus
    pub fn reduce_in_place<P>(&mut self, action: EditorAction, prompt: &P) -> EditOutcome
    where
        P: ConfirmPrompt + ?Sized,
    {
        match action {
            EditorAction::UpdateField { name, value } => self.update_field(&name, value),
            EditorAction::ResetDraft => self.reset_draft(),
            EditorAction::Submit => self.submit(),
            EditorAction::BeginEdit(id) => self.begin_edit(id),
            EditorAction::Remove(id) => self.remove(id, prompt),
        }
    }

    // Uuid collisions are not expected, but uniqueness within the list is an
    // invariant, so re-draw rather than trust the generator.
    fn fresh_id(&self) -> RecordId {
        loop {
            let id = RecordId::generate();
            if self.position(id).is_none() {
                return id;
            }
        }
    }
}
