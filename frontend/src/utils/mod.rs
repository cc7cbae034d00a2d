pub mod navigation;
pub mod search;
pub mod storage;
pub mod token;
