use crate::error::SubmitError;
use crate::pattern::to_pattern;
use crate::state::record::{HttpMethod, Record};
use crate::state::store::RecordStore;
use crate::state::text::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Url,
    Method,
    Payload,
    Response,
    Submit,
}

impl FormField {
    /// Cycle order: Url → Method → Payload → Response → Submit → Url
    pub fn next(&self) -> FormField {
        match self {
            FormField::Url => FormField::Method,
            FormField::Method => FormField::Payload,
            FormField::Payload => FormField::Response,
            FormField::Response => FormField::Submit,
            FormField::Submit => FormField::Url,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Url => FormField::Submit,
            FormField::Method => FormField::Url,
            FormField::Payload => FormField::Method,
            FormField::Response => FormField::Payload,
            FormField::Submit => FormField::Response,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Url | FormField::Payload | FormField::Response)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Payload | FormField::Response)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(usize),
    Updated(usize),
}

/// Create/edit form for a single record.
///
/// The URL is kept twice: `url_input` is what the user typed, `url` is the
/// escaped pattern derived from it after every edit and is what gets stored.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    url_input: TextField,
    url: String,
    pub method: HttpMethod,
    pub payload: TextField,
    pub response: TextField,
    pub field: FormField,
    edit_index: Option<usize>,
    /// `(edit index, store revision)` the fields were last filled from.
    synced: Option<(usize, u64)>,
}

impl FormState {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn url_input(&self) -> &TextField {
        &self.url_input
    }

    pub fn edit_index(&self) -> Option<usize> {
        self.edit_index
    }

    pub fn is_editing(&self) -> bool {
        self.edit_index.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() { "Edit Request" } else { "Add New Request" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update Request" } else { "Add Request" }
    }

    /// Enter edit mode for `index`. The fields are filled on the next
    /// [`FormState::sync`].
    pub fn begin_edit(&mut self, index: usize) {
        self.edit_index = Some(index);
        self.synced = None;
        self.field = FormField::Url;
    }

    /// Leave edit mode without touching the store.
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    /// Overwrite the fields from the record under edit whenever the edit
    /// index or the store contents changed since the last fill. Returns
    /// `true` if the fields were refilled.
    pub fn sync(&mut self, store: &RecordStore) -> bool {
        let Some(index) = self.edit_index else {
            self.synced = None;
            return false;
        };
        let key = (index, store.revision());
        if self.synced == Some(key) {
            return false;
        }
        match store.get(index) {
            Some(record) => {
                let record = record.clone();
                self.fill_from(record);
                self.synced = Some(key);
                tracing::debug!(index, revision = key.1, "form filled from store");
                true
            }
            None => {
                tracing::warn!(index, len = store.len(), "edit target no longer exists");
                self.edit_index = None;
                self.synced = None;
                false
            }
        }
    }

    /// Apply a text edit to the focused field. Editing the URL re-derives
    /// the stored pattern from the whole input.
    pub fn edit_active(&mut self, edit: impl FnOnce(&mut TextField)) {
        match self.field {
            FormField::Url => {
                edit(&mut self.url_input);
                self.url = to_pattern(self.url_input.as_str());
            }
            FormField::Payload => edit(&mut self.payload),
            FormField::Response => edit(&mut self.response),
            FormField::Method | FormField::Submit => {}
        }
    }

    /// Type `input` into the URL field as if entered key by key.
    pub fn type_url(&mut self, input: &str) {
        let previous = self.field;
        self.field = FormField::Url;
        for c in input.chars() {
            self.edit_active(|f| f.insert(c));
        }
        self.field = previous;
    }

    pub fn active_text(&self) -> Option<&TextField> {
        match self.field {
            FormField::Url => Some(&self.url_input),
            FormField::Payload => Some(&self.payload),
            FormField::Response => Some(&self.response),
            FormField::Method | FormField::Submit => None,
        }
    }

    pub fn record(&self) -> Record {
        Record::new(
            self.url.clone(),
            self.method,
            self.payload.as_str(),
            self.response.as_str(),
        )
    }

    /// Append or replace depending on the edit session, then reset the form.
    /// An empty URL is rejected and leaves everything untouched.
    pub fn submit(&mut self, store: &mut RecordStore) -> Result<SubmitOutcome, SubmitError> {
        if self.url.is_empty() {
            return Err(SubmitError::EmptyUrl);
        }
        let record = self.record();
        let outcome = match self.edit_index {
            Some(index) => {
                store.replace_at(index, record)?;
                SubmitOutcome::Updated(index)
            }
            None => SubmitOutcome::Created(store.append(record)),
        };
        self.reset();
        Ok(outcome)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn fill_from(&mut self, record: Record) {
        // Stored URLs are already patterns; they are shown as-is.
        self.url_input.set(record.url.clone());
        self.url = record.url;
        self.method = record.method;
        self.payload.set(record.payload);
        self.response.set(record.response);
    }
}
