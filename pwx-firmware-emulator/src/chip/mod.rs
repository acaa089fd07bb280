pub mod emulator;

pub use emulator::ChipEmulator;
