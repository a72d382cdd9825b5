//! customerio-track: Customer.io tracking API client
//!
//! A library for creating, updating and deleting customer records and
//! recording customer events through the Customer.io tracking REST API.

pub mod track;
pub mod transport;
