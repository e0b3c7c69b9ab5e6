//! Travelbook - terminal client for the travel booking service.
//!
//! Architecture:
//! - `api` talks to the REST backend and owns the session token
//! - `controller` turns user actions into API calls and view updates
//! - `view` holds screen state and renders through a typed binding layer
//! - `session` persists the token and cached user between runs

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
#[cfg(test)]
mod fixtures;
pub mod models;
pub mod session;
pub mod view;
