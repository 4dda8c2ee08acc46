//! Core client modules
//!
//! This module contains configuration, constants, logging, the per-request
//! configuration and the sentence client itself.

pub mod client;
pub mod config;
pub mod constants;
pub mod logging;
pub mod request;
pub mod resource;
