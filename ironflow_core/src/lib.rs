pub mod flow;
pub mod progress;
pub mod tick;
pub mod timer;
