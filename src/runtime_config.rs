//! Environment-based runtime configuration.
//!
//! ## `PARAMEDIC_STACK_SIZE`
//!
//! Stack size for handler coroutines, in bytes. Accepts decimal (`16384`) or
//! hexadecimal (`0x4000`) values. Default: `0x4000` (16 KB). Tune upward for
//! handlers with deep call chains; every concurrent coroutine pays the full
//! stack, so oversizing costs memory.

use std::env;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes (default: 16 KB / 0x4000)
    pub stack_size: usize,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let stack_size = match env::var("PARAMEDIC_STACK_SIZE") {
            Ok(val) => parse_stack_size(&val).unwrap_or(0x4000),
            Err(_) => 0x4000,
        };
        RuntimeConfig { stack_size }
    }
}

fn parse_stack_size(val: &str) -> Option<usize> {
    if let Some(hex) = val.strip_prefix("0x") {
        usize::from_str_radix(hex, 16).ok()
    } else {
        val.parse().ok()
    }
}
