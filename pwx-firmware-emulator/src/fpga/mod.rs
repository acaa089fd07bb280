pub mod emulator;

pub use emulator::FPGAEmulator;
