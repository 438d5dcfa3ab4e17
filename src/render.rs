// Terminal rendering of the task list
//
// Pure functions of their inputs; colour is controlled globally through
// `colored::control`.

use crate::models::{Priority, SortDirection, Task, TaskId};
use colored::Colorize;

const FLAG: &str = "⚑";

pub const EMPTY_LIST: &str = "No tasks yet";

/// Flag icon, red for high and orange for medium. Low is left uncoloured.
pub fn priority_icon(priority: Priority) -> String {
    match priority {
        Priority::High => FLAG.truecolor(0xFF, 0x6B, 0x6B).to_string(),
        Priority::Medium => FLAG.truecolor(0xFC, 0xA3, 0x11).to_string(),
        Priority::Low => FLAG.to_string(),
    }
}

/// One list row, `index` being the 1-based position shown to the user
pub fn task_row(index: usize, task: &Task) -> String {
    let mut row = format!("{:>3}. {} {}", index, priority_icon(task.priority), task.name.bold());
    if !task.description.is_empty() {
        row.push_str(&format!("\n       {}", task.description.dimmed()));
    }
    row
}

pub fn task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return EMPTY_LIST.dimmed().to_string();
    }
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| task_row(i + 1, task))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Priority names in form order, e.g. `low/medium/high`
pub fn priority_choices() -> String {
    Priority::ALL.map(Priority::as_str).join("/")
}

pub fn sort_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Descending => "Sort: Highest priority first",
        SortDirection::Ascending => "Sort: Lowest priority first",
    }
}

pub fn form_title(editing: Option<TaskId>) -> &'static str {
    match editing {
        Some(_) => "Edit task",
        None => "New task",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskInput;
    use crate::store::TaskStore;

    fn plain() {
        colored::control::set_override(false);
    }

    fn sample() -> TaskStore {
        let mut store = TaskStore::new();
        store
            .upsert(TaskInput::new("Pay rent", "before friday", Priority::High), None)
            .unwrap();
        store.upsert(TaskInput::new("Water plants", "", Priority::Low), None).unwrap();
        store
    }

    #[test]
    fn test_empty_list() {
        plain();
        assert_eq!(task_list(&[]), "No tasks yet");
    }

    #[test]
    fn test_task_list_rows() {
        plain();
        let store = sample();
        let rendered = task_list(store.tasks());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  1. ⚑ Pay rent");
        assert_eq!(lines[1], "       before friday");
        assert_eq!(lines[2], "  2. ⚑ Water plants");
    }

    #[test]
    fn test_priority_icon_plain() {
        plain();
        for priority in Priority::ALL {
            assert_eq!(priority_icon(priority), FLAG);
        }
    }

    #[test]
    fn test_priority_choices_in_form_order() {
        assert_eq!(priority_choices(), "low/medium/high");
    }

    #[test]
    fn test_labels() {
        assert_eq!(sort_label(SortDirection::Descending), "Sort: Highest priority first");
        assert_eq!(sort_label(SortDirection::Ascending), "Sort: Lowest priority first");

        let store = sample();
        assert_eq!(form_title(None), "New task");
        assert_eq!(form_title(Some(store.tasks()[0].id)), "Edit task");
    }
}
