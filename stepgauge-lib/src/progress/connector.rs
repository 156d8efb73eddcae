use super::display::ProgressSink;
use core::cell::RefCell;
use core::fmt::{Debug, Formatter};
use std::rc::Rc;
use strum::{Display, EnumIter};

const LOG_TARGET: &str = " connector";

type Listener = Box<dyn FnMut(i64)>;

/// A named notification stream on a [`ProgressConnector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Channel {
    /// Carries the total step count when a sequence starts.
    Initialize,

    /// Carries the completed step count on every update.
    Progress,
}

/// Handle returned by [`ProgressConnector::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Subscription {
    id: ListenerId,
    listener: Listener,
}

/// Relays initialize and progress signals to every subscriber, in subscription order.
///
/// The connector performs no validation: values are forwarded unchanged and clamping is up to
/// the receiving display. Dispatch is synchronous; every listener has run by the time
/// [`initialize`](Self::initialize) or [`advance`](Self::advance) returns.
pub struct ProgressConnector {
    on_initialize: Vec<Subscription>,
    on_progress: Vec<Subscription>,
    next_id: u64,
}

impl ProgressConnector {
    /// Create a connector with no listeners.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            on_initialize: Vec::new(),
            on_progress: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a connector wired straight to `display`, if one is given.
    ///
    /// The display's `initialize` and `update_progress` become the first listeners on their
    /// channels; more can be subscribed afterwards.
    #[must_use]
    pub fn with_display<D: ProgressSink + 'static>(display: Option<Rc<RefCell<D>>>) -> Self {
        let mut connector = Self::new();

        if let Some(display) = display {
            let target = Rc::clone(&display);
            let _ = connector.subscribe(Channel::Initialize, move |total| target.borrow_mut().initialize(total));
            let _ = connector.subscribe(Channel::Progress, move |completed| display.borrow_mut().update_progress(completed));
        } else {
            log::debug!(target: LOG_TARGET, "No display supplied, starting without default listeners");
        }

        connector
    }

    /// Notify every [`Channel::Initialize`] listener of a new sequence of `total_steps` steps.
    pub fn initialize(&mut self, total_steps: i64) {
        self.notify(Channel::Initialize, total_steps);
    }

    /// Notify every [`Channel::Progress`] listener that `completed_steps` steps are done.
    pub fn advance(&mut self, completed_steps: i64) {
        self.notify(Channel::Progress, completed_steps);
    }

    /// Add `listener` to the end of `channel`'s listener list.
    pub fn subscribe(&mut self, channel: Channel, listener: impl FnMut(i64) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        self.listeners_mut(channel).push(Subscription {
            id,
            listener: Box::new(listener),
        });
        id
    }

    /// Remove a listener from `channel`.
    ///
    /// Returns `false` if no listener with that id is subscribed to `channel`.
    pub fn unsubscribe(&mut self, channel: Channel, id: ListenerId) -> bool {
        let listeners = self.listeners_mut(channel);
        let Some(index) = listeners.iter().position(|s| s.id == id) else {
            return false;
        };

        drop(listeners.remove(index));
        true
    }

    #[must_use]
    pub const fn listener_count(&self, channel: Channel) -> usize {
        match channel {
            Channel::Initialize => self.on_initialize.len(),
            Channel::Progress => self.on_progress.len(),
        }
    }

    fn listeners_mut(&mut self, channel: Channel) -> &mut Vec<Subscription> {
        match channel {
            Channel::Initialize => &mut self.on_initialize,
            Channel::Progress => &mut self.on_progress,
        }
    }

    fn notify(&mut self, channel: Channel, value: i64) {
        let listeners = self.listeners_mut(channel);
        log::trace!(target: LOG_TARGET, "{channel}({value}) -> {} listener(s)", listeners.len());

        for subscription in listeners.iter_mut() {
            (subscription.listener)(value);
        }
    }
}

impl Default for ProgressConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ProgressConnector {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProgressConnector")
            .field("on_initialize", &self.on_initialize.len())
            .field("on_progress", &self.on_progress.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
