//! Tab panels
//!
//! Each panel implements the Module trait and handles its own:
//! - Key input processing
//! - Rendering
//!
//! Panels:
//! - token_info: static token metadata and market statistics
//! - transfer: deposit/withdraw form with live fee preview
//! - staking: staking metrics with stake/claim triggers

pub mod staking;
pub mod token_info;
pub mod transfer;
