//! # lector-core
//!
//! Core types, taxonomy and error types for Lector.
//!
//! This crate provides the foundational types shared across all Lector crates:
//! - The closed bias/fallacy taxonomy and the label validator
//! - Record structs produced by the analysis pipelines
//! - Grading and provenance enums
//! - The repository seam consumed by the pipelines
//! - Report response types
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod repository;
pub mod responses;
pub mod taxonomy;
