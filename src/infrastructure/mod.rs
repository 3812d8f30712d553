pub mod media;
pub mod staging;
pub mod storage;
