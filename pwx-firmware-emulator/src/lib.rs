pub mod chip;
pub mod fpga;
pub mod spi;

pub use chip::emulator::ChipEmulator;
pub use fpga::emulator::FPGAEmulator;
