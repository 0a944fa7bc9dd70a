// src/views/mod.rs

pub mod authoring;
pub mod layout;
pub mod results;
pub mod taking;
