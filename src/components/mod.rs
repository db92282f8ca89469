//! UI Components
//!
//! Presentation layer for the todo list.

mod empty_state;
mod error_message;
mod todo_input;
mod todo_item;
mod todo_list;

pub use empty_state::EmptyState;
pub use error_message::ErrorMessage;
pub use todo_input::TodoInput;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
