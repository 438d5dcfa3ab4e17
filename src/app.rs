// Application state driven by UI events
//
// The store never reads UI state on its own: the form contents, the edit
// target and the sort direction live here and are passed in explicitly.

use crate::error::ValidationError;
use crate::models::{Priority, SortDirection, Task, TaskId, TaskInput};
use crate::store::{TaskStore, Upsert};
use tracing::debug;

/// Current contents of the task form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub description: String,
    pub priority: Priority,
}

impl FormState {
    fn blank(priority: Priority) -> Self {
        Self {
            priority,
            ..Self::default()
        }
    }

    fn to_input(&self) -> TaskInput {
        TaskInput::new(self.name.clone(), self.description.clone(), self.priority)
    }
}

impl From<&Task> for FormState {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            priority: task.priority,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct App {
    store: TaskStore,
    form: FormState,
    editing: Option<TaskId>,
    form_open: bool,
    sort_direction: SortDirection,
    default_priority: Priority,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `priority` when resetting the form instead of `Priority::Low`
    pub fn with_default_priority(priority: Priority) -> Self {
        Self {
            form: FormState::blank(priority),
            default_priority: priority,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    fn reset_form(&mut self) {
        self.form = FormState::blank(self.default_priority);
        self.editing = None;
    }

    pub fn open_new_form(&mut self) {
        self.reset_form();
        self.form_open = true;
    }

    /// Open the form pre-filled with the task's fields.
    /// Returns false, leaving everything as it was, if `id` is unknown.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = self.store.get(id) else {
            debug!(%id, "begin_edit: unknown task");
            return false;
        };
        self.form = FormState::from(task);
        self.editing = Some(id);
        self.form_open = true;
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.form.priority = priority;
    }

    /// Save the form. On error the form stays open with its contents intact.
    pub fn submit(&mut self) -> Result<Upsert, ValidationError> {
        let outcome = self.store.upsert(self.form.to_input(), self.editing)?;
        self.reset_form();
        self.form_open = false;
        Ok(outcome)
    }

    /// Close the form. Field values are kept until the next `open_new_form`.
    pub fn cancel(&mut self) {
        self.form_open = false;
    }

    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.store.remove(id)
    }

    pub fn toggle_sort(&mut self) {
        self.sort_direction = self.store.sort_by_priority(self.sort_direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(app: &mut App, name: &str, priority: Priority) -> TaskId {
        app.open_new_form();
        app.set_name(name);
        app.set_priority(priority);
        app.submit().unwrap().id()
    }

    #[test]
    fn test_new_app_state() {
        let app = App::new();
        assert!(app.tasks().is_empty());
        assert!(!app.is_form_open());
        assert_eq!(app.editing(), None);
        assert_eq!(app.sort_direction(), SortDirection::Descending);
        assert_eq!(app.form(), &FormState::default());
    }

    #[test]
    fn test_submit_creates_and_resets_form() {
        let mut app = App::new();
        app.open_new_form();
        app.set_name("Buy milk");
        app.set_description("2 litres");
        app.set_priority(Priority::Medium);

        let outcome = app.submit().unwrap();
        assert!(matches!(outcome, Upsert::Created(_)));
        assert!(!app.is_form_open());
        assert_eq!(app.form(), &FormState::default());
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].description, "2 litres");
    }

    #[test]
    fn test_submit_empty_name_keeps_form_open() {
        let mut app = App::new();
        app.open_new_form();
        app.set_name("   ");
        app.set_description("kept");

        assert_eq!(app.submit(), Err(ValidationError::EmptyName));
        assert!(app.is_form_open());
        assert_eq!(app.form().description, "kept");
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn test_edit_prefills_and_updates() {
        let mut app = App::new();
        add(&mut app, "a", Priority::Low);
        let b = add(&mut app, "b", Priority::High);

        assert!(app.begin_edit(b));
        assert_eq!(app.editing(), Some(b));
        assert_eq!(app.form().name, "b");
        assert_eq!(app.form().priority, Priority::High);

        app.set_name("b renamed");
        assert_eq!(app.submit().unwrap(), Upsert::Updated(b));
        assert_eq!(app.editing(), None);
        assert_eq!(app.tasks()[1].name, "b renamed");
        assert_eq!(app.tasks()[1].id, b);
    }

    #[test]
    fn test_begin_edit_unknown_leaves_state() {
        let mut app = App::new();
        let a = add(&mut app, "a", Priority::Low);
        app.delete(a);

        assert!(!app.begin_edit(a));
        assert!(!app.is_form_open());
        assert_eq!(app.editing(), None);
    }

    #[test]
    fn test_open_new_form_clears_edit_target() {
        let mut app = App::new();
        let a = add(&mut app, "a", Priority::High);
        app.begin_edit(a);
        app.cancel();

        app.open_new_form();
        assert_eq!(app.editing(), None);
        assert_eq!(app.form(), &FormState::default());
    }

    #[test]
    fn test_cancel_keeps_fields() {
        let mut app = App::new();
        app.open_new_form();
        app.set_name("draft");
        app.cancel();

        assert!(!app.is_form_open());
        assert_eq!(app.form().name, "draft");
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn test_delete_edit_target_clears_it() {
        let mut app = App::new();
        let a = add(&mut app, "a", Priority::Low);
        app.begin_edit(a);

        assert!(app.delete(a).is_some());
        assert_eq!(app.editing(), None);

        // Saving now creates a fresh task rather than resurrecting the old one
        let outcome = app.submit().unwrap();
        assert!(matches!(outcome, Upsert::Created(id) if id != a));
    }

    #[test]
    fn test_toggle_sort_flips_direction() {
        let mut app = App::new();
        add(&mut app, "low", Priority::Low);
        add(&mut app, "high", Priority::High);

        app.toggle_sort();
        assert_eq!(app.sort_direction(), SortDirection::Ascending);
        assert_eq!(app.tasks()[0].name, "high");

        app.toggle_sort();
        assert_eq!(app.sort_direction(), SortDirection::Descending);
        assert_eq!(app.tasks()[0].name, "low");
    }

    #[test]
    fn test_default_priority_used_on_reset() {
        let mut app = App::with_default_priority(Priority::Medium);
        assert_eq!(app.form().priority, Priority::Medium);

        app.open_new_form();
        app.set_name("x");
        app.set_priority(Priority::High);
        app.submit().unwrap();
        assert_eq!(app.form().priority, Priority::Medium);
    }
}
