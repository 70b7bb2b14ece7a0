//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business operations
//! and orchestrate interactions between different parts of the application,
//! such as validating form input, dispatching requests, and reporting
//! outcomes through toasts.

pub mod patient_service;
