// Terminal module for lightsched
// Raw mode and alternate screen handling

mod setup;

pub use setup::{cleanup_terminal_state as cleanup, setup_terminal as setup};
