//! NutriScan Library
//!
//! Core pipeline for nutrition label analysis: field extraction from
//! OCR-derived text, per-condition health evaluation, and alternative
//! product suggestions.

pub mod alternatives;
pub mod analysis;
pub mod build_info;
pub mod extract;
pub mod mcp;
pub mod models;
pub mod tools;
