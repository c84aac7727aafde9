//! Resumelink - personal portfolio backend
//!
//! Backend service for a client-rendered portfolio site: issues trackable
//! share links for the resume document, relays contact-form submissions
//! to an SMTP provider, and serves the resume download.
//!
//! # Architecture
//! - `storages`: share-link store with a JSON-file backend
//! - `services`: HTTP handlers (share links, contact relay, resume, health)
//! - `mailer`: outbound SMTP relay
//! - `config`: environment-driven configuration
//! - `system`: logging initialization

pub mod config;
pub mod errors;
pub mod mailer;
pub mod services;
pub mod storages;
pub mod system;
pub mod utils;
