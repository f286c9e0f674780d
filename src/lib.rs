//! Package Assistant - Lost package support conversation
//!
//! This crate implements a text-based assistant that looks up the status of
//! an order, offers self-service remediation when a package may be lost, and
//! escalates to a human agent when the user insists.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
