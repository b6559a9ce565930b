//! Terminal presentation for the rulesnap binary.

pub mod blocks;
pub mod console_sink;
pub mod context;
pub mod live_region;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
