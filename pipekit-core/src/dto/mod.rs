//! Data Transfer Objects for the pipeline service API
//!
//! Request and response bodies exchanged with the pipeline service's REST
//! API. Field names follow the service's JSON wire format.

pub mod experiment;
pub mod run;
