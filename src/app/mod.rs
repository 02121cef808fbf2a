// Application layer: the front-end flows driving the sequencer.

pub mod file_mode;
pub mod interactive;
pub mod render;
pub mod sample;
