//! CO2 물성 상관식 모듈 모음.

pub mod density;

pub use density::*;
