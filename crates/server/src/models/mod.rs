//! Domain models and the response shaper.
//!
//! Each entity has two representations: a raw row type (`sqlx::FromRow`,
//! integer codes and native chrono values, exactly what the store holds) and
//! a response type (labels and formatted strings, exactly what clients see).
//! The `TryFrom` conversion between them is the single response shaper every
//! endpoint goes through.
//!
//! A row that fails conversion means the *stored* data is bad. That is a
//! [`ShapeError`], reported as a 500-class failure distinct from request
//! validation: the client did nothing wrong.

pub mod document;
pub mod employee;

use thiserror::Error;

pub use document::{Document, DocumentRow};
pub use employee::{Employee, EmployeeRow, NewEmployee};

/// A stored value failed decoding into its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A stored enum code is outside its vocabulary.
    #[error("stored record is invalid: {0}")]
    Enum(#[from] crewbase_core::EnumError),
}
