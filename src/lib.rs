//! staymap library exports for testing

pub mod core;
pub mod listings;
pub mod tui;

#[cfg(test)]
pub mod test_support;
