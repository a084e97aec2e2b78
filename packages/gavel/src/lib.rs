#![no_std]

pub mod constants;
pub mod error;
pub mod interfaces;
pub mod math;
pub mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;
