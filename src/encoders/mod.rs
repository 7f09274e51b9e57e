pub mod algorithms;
pub mod codec;
