//! Pipekit Core
//!
//! Core types and abstractions for defining and running pipekit pipelines.
//!
//! This crate contains:
//! - Domain types: component and pipeline descriptors, runs and experiments
//! - Registry: lookup of components by name
//! - Executor: the container-side entrypoint contract
//! - DTOs: request/response bodies for the pipeline service API

pub mod domain;
pub mod dto;
pub mod executor;
pub mod registry;

pub use domain::component::Component;
pub use domain::parameter::{Arguments, ParameterSpec, ParameterType};
pub use domain::pipeline::{Pipeline, PipelineError, Task};
pub use registry::ComponentRegistry;
