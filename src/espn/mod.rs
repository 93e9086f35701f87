mod client;

pub use client::{EspnClient, EspnError, View};
