//! Pipekit Compiler
//!
//! Turns pipeline descriptors into the pipeline service's intermediate
//! representation and reads compiled packages back for submission.
//! It includes:
//! - IR types mirroring the service's pipeline spec layout
//! - The compiler, which validates a pipeline and builds its IR
//! - Package I/O: YAML rendering, writing and loading

pub mod compiler;
pub mod error;
pub mod ir;
pub mod package;

pub use compiler::{CompileOptions, Compiler, DEFAULT_EXECUTOR_IMAGE};
pub use error::{CompileError, Result};
pub use ir::PipelineSpec;
pub use package::{Package, load_package, to_yaml};
