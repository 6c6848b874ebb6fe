#![doc = include_str!("../README.md")]

pub mod client;
pub mod display;
pub mod error;
pub mod session;

pub use client::{ClientConfig, FactClient, FactSource, MISSING_TEXT, parse_fact};
pub use display::{display_fact, render_fact};
pub use error::{FetchError, Result};
pub use session::{Outcome, Session, Summary, is_continue};
