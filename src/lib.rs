//! Terminal showcase for an agency site.
//!
//! The interesting part is [`rotation`]: the controller behind the hero and
//! testimonial carousels. Everything under [`ui`] renders and routes input.

pub mod cli;
pub mod config;
pub mod contact;
pub mod content;
pub mod logging;
pub mod rotation;
pub mod shutdown;
pub mod ui;
