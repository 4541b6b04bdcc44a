//! Daygrid Core Types and Definitions
//!
//! This crate provides the shared vocabulary of the Daygrid layout engine.
//! It includes:
//!
//! - **Segments**: Column-spanning placements of events on a row ([`segment::Segment`])
//! - **Cells**: Arena-allocated matrix cells ([`cell::Cell`])
//! - **Grid**: Fixed-size level × column lookup tables ([`grid::Grid`])
//! - **Direction**: Left-to-right / right-to-left display order ([`direction::Direction`])
//! - **Collaborators**: Ordering preference and intro-cell provider traits ([`collab`] module)
//! - **Colors**: CSS color handling ([`color::Color`])

pub mod cell;
pub mod collab;
pub mod color;
pub mod direction;
pub mod grid;
pub mod segment;
