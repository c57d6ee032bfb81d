//! HTTP adapters exposing the application handlers over axum.

pub mod schedule;
