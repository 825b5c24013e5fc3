//! Domain types and pure logic for the scriptline dialogue API.
//!
//! Nothing in this crate performs I/O. Tables and indices live in
//! `scriptline-db`; HTTP concerns live in `scriptline-api`.

pub mod dialogue;
pub mod error;
pub mod ranking;
pub mod search;
pub mod sort;
pub mod types;
