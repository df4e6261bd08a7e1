//! Routed pages

pub mod home;
pub mod login;
pub mod profile;
pub mod project;
