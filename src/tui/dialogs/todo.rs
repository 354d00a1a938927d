//! Todo add/edit forms

use crate::error::{TadaError, TadaResult};
use crate::models::{validate_description, NewTodo, Priority, Todo, TodoChange};

use super::form::FormState;

const DESCRIPTION: usize = 0;
const PRIORITY: usize = 1;

fn base(title: &str, description: &str, priority: &str) -> FormState {
    FormState::new(title)
        .field("Description", true, "Enter todo description", description)
        .field(
            "Priority",
            false,
            "low, medium, or high (default: medium)",
            priority,
        )
}

/// Empty form for a new todo
pub fn add_form() -> FormState {
    base("Add Todo", "", "")
}

/// Form pre-populated from an existing todo
pub fn edit_form(todo: &Todo) -> FormState {
    base(
        &format!("Edit Todo #{}", todo.id),
        &todo.description,
        &todo.priority.to_string().to_lowercase(),
    )
}

fn parse_fields(form: &FormState) -> TadaResult<(String, Priority)> {
    form.check_required().map_err(TadaError::Validation)?;

    let description = validate_description(form.value(DESCRIPTION))?;
    let priority = match form.value(PRIORITY).trim() {
        "" => Priority::Medium,
        raw => Priority::parse(raw)?,
    };
    Ok((description, priority))
}

/// Validate the add form into a new todo
pub fn parse_new(form: &FormState) -> TadaResult<NewTodo> {
    let (description, priority) = parse_fields(form)?;
    Ok(NewTodo::new(description, priority))
}

/// Validate the edit form into description and priority changes
pub fn parse_changes(form: &FormState) -> TadaResult<Vec<TodoChange>> {
    let (description, priority) = parse_fields(form)?;
    Ok(vec![
        TodoChange::Description(description),
        TodoChange::Priority(priority),
    ])
}
