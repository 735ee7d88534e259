// App module for lightsched
// Holds the terminal client's state and turns keys into cascade requests

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, FilterState};
