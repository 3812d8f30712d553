pub mod admission;
pub mod encoding;
pub mod quality;
pub mod toolchain;
pub mod validation;
