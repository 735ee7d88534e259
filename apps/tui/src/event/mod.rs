// Event module for lightsched
// Terminal event loop and the headless one-shot mode

mod headless;
mod loop_handler;

pub use headless::run_headless;
pub use loop_handler::run;
