//! Application state
//!
//! - `DemoState`: the demo tab, its history and the coordinator between them
//! - `DemoRow`: table contents

mod demo;
mod rows;

pub use demo::DemoState;
pub use rows::{DemoRow, demo_rows};
