//! Core data types for the Precifica pricing engine

pub mod level;
pub mod quote;
pub mod service;
