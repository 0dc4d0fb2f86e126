pub mod download;
pub mod session;
pub mod tone;
