//! Manual test harness for a progress panel
//!
//! [`DemoDriver`] keeps a step counter and pushes it through a [`ProgressConnector`] as the
//! user steps forward and back. [`DemoAction`] is the vocabulary accepted by the `demo`
//! command.

mod action;
mod driver;

pub use action::DemoAction;
pub use driver::DemoDriver;
