mod decoder;

pub use decoder::FrameDecoder;
