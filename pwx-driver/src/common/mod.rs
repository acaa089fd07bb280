mod freq;

pub use freq::*;
