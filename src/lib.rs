//! Auspire - Four Pillars (BaZi) chart engine
//!
//! This crate annotates a four-pillar chart relative to its Day Master and
//! runs a five-stage strength, element and pattern analysis over it.

pub mod application;
pub mod config;
pub mod domain;
