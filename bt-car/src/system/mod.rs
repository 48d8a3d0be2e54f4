//! Core system components for car operation

pub mod indicator;
pub mod mailbox;
pub mod resources;
