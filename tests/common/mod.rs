//! Shared test support: a scripted in-memory backend and entity builders.

#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;
