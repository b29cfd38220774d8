pub mod scroller;

pub use scroller::{MAX_SPEED, MIN_SPEED, Prompter, ScrollEngine};
