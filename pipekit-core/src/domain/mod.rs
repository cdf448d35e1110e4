//! Core domain types
//!
//! This module contains the descriptors used to declare pipelines and the
//! records the pipeline service hands back once a pipeline is submitted.
//! Descriptors are shared between the compiler (which serializes them) and
//! the executor (which invokes them inside a container).

pub mod component;
pub mod experiment;
pub mod parameter;
pub mod pipeline;
pub mod run;
