//! Push dispatch service: accepts notification requests over HTTP and
//! forwards them to OneSignal.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
