//! Studio Scheduler - class-scheduling and instructor-assignment rules
//!
//! This crate implements the booking rule engine behind a fitness studio's
//! admin calendar and class-creation form: class categorization, instructor
//! availability windows, Personal Training alternation, and the slot
//! capacity ceiling.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
