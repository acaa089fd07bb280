mod frame;

pub use frame::SpiFrame;
