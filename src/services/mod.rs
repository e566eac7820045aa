// src/services/mod.rs
pub mod coach;
pub mod gemini;
pub mod generator;
pub mod persona;
