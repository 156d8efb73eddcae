//! Step-progress model and signal relay
//!
//! # Implementation Model
//!
//! - [`ProgressState`] is the step counter: a total set by `initialize` and a completed count
//!   clamped into `0..=total`, from which the fill fraction and the percentage are derived.
//! - [`ProgressDisplay`] owns a state and a [`Surface`](crate::surfaces::Surface) and re-renders
//!   after every change.
//! - [`ProgressConnector`] decouples whoever produces progress signals from whoever renders
//!   them. It keeps an ordered listener list per [`Channel`] and relays each signal, unchanged
//!   and synchronously, to every listener in subscription order.
//!
//! Everything here is single-threaded. A display shared between a connector and its owner
//! lives in an `Rc<RefCell<_>>`.

mod connector;
mod display;
mod state;

pub use connector::{Channel, ListenerId, ProgressConnector};
pub use display::{ProgressDisplay, ProgressSink, Rendering};
pub use state::{ProgressState, Rounding};
