//! Asana task source for the burndown reporter.
//!
//! This crate provides:
//! - REST client for the Asana v1 API (project metadata, task listing,
//!   per-task hydration)
//! - Loader for "View As JSON" project snapshots
//! - Type definitions for the task fields the reports consume

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod client;
pub mod error;
pub mod models;
pub mod snapshot;

pub use client::AsanaClient;
pub use error::AsanaError;
pub use models::{ApiResponse, Assignee, Project, Tag, Task, TaskCompact};
pub use snapshot::load_tasks;
