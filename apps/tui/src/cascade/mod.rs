// Cascading province → municipality → place selection
// Widget model, selection state machine and the async chains that feed it

pub mod client;
pub mod dropdown;
pub mod form;

pub use client::{CascadeClient, CascadeController};
pub use dropdown::{ChangeListener, Dropdown, DropdownOption, Level};
pub use form::{Completion, Control, Outcome, Request, SelectionForm, SelectionState, Transition};
