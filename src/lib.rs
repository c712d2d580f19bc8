//! Small, self-contained object-oriented building blocks:
//! guarded value objects, an order status state machine, a strategy-based
//! discount calculator, generic containers, and a handful of trait-driven
//! designs.
//!
//! The domain modules do not depend on each other. They share the error
//! taxonomy in [`error`], the policy knobs in [`config`], and the tracing
//! setup in [`logging`].

pub mod config;
pub mod error;
pub mod logging;

pub mod bank;
pub mod cart;
pub mod collections;
pub mod discount;
pub mod entities;
pub mod grades;
pub mod journal;
pub mod notify;
pub mod order;
pub mod payroll;
pub mod shapes;
pub mod ticket;

pub use error::{DomainError, Result};
