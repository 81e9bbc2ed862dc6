pub mod audit;
pub mod batch;
pub mod cancel;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod workflow;
