//! Core data models for the payroll register.
//!
//! This module contains the domain models used throughout the register.

mod employee;

pub use employee::{Employee, ParseRoleError, Role};
