use crate::progress::ProgressConnector;

const LOG_TARGET: &str = "      demo";

/// Steps a counter between zero and a fixed total, reporting every move through a connector.
#[derive(Debug)]
pub struct DemoDriver {
    connector: ProgressConnector,
    total_steps: u32,
    current: u32,
}

impl DemoDriver {
    #[must_use]
    pub const fn new(connector: ProgressConnector, total_steps: u32) -> Self {
        Self {
            connector,
            total_steps,
            current: 0,
        }
    }

    /// Announce the total to the connector's listeners.
    pub fn start(&mut self) {
        log::info!(target: LOG_TARGET, "Starting demo with {} step(s)", self.total_steps);
        self.connector.initialize(i64::from(self.total_steps));
    }

    /// Complete one more step, stopping at the total. The position is reported either way.
    pub fn next_step(&mut self) {
        if self.current < self.total_steps {
            self.current += 1;
        }
        self.connector.advance(i64::from(self.current));
    }

    /// Undo one step, stopping at zero. The position is reported either way.
    pub fn prev_step(&mut self) {
        self.current = self.current.saturating_sub(1);
        self.connector.advance(i64::from(self.current));
    }

    /// Go back to zero and re-announce the total.
    pub fn reset(&mut self) {
        log::debug!(target: LOG_TARGET, "Resetting demo");
        self.current = 0;
        self.connector.initialize(i64::from(self.total_steps));
    }

    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub const fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub const fn connector_mut(&mut self) -> &mut ProgressConnector {
        &mut self.connector
    }
}
