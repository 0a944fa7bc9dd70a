// src/handlers/mod.rs

pub mod api;
pub mod authoring;
pub mod forms;
pub mod health;
pub mod results;
pub mod taking;
