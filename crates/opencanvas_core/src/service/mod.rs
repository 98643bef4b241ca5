//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate canvas and history calls into use-case level APIs.

pub mod drawing_service;
