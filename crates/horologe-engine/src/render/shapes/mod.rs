//! Instanced quad pipelines.

mod common;

pub mod shape;
pub mod text;
