//! Transports that deliver window descriptors.
//!
//! Window-manager helpers (an i3/sway subscription script, a bar plugin, …)
//! write newline-delimited JSON descriptors which [`lines::LineSource`]
//! parses and forwards.

pub mod lines;
