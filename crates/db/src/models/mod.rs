//! Row models for the four CSV tables plus the request and response shapes
//! built from them.

pub mod character;
pub mod conversation;
pub mod line;
pub mod movie;
