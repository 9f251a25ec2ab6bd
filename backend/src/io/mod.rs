//! # IO Layer
//!
//! Everything the browser talks to: HTML pages rendered with tera and the
//! HTTP handlers that sit in front of the domain services.

pub mod pages;
pub mod rest;
