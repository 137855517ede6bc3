//! Delivery Dashboard - cycle progress reporting over issue tracker data
//!
//! This crate turns a cycle's tracker issues into an initiative ->
//! roadmap item -> release item tree with stage, status, validation and
//! progress information, and serves it over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
