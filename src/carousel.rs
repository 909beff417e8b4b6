use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoAdvanceToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    Start { token: AutoAdvanceToken, period: Duration },
    Stop,
    Keep,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    current_index: usize,
    paused: bool,
    mounted: bool,
    interval: Duration,
    generation: u64,
    timer_running: bool,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>, interval: Duration) -> Self {
        Self {
            items,
            current_index: 0,
            paused: false,
            mounted: false,
            interval,
            generation: 0,
            timer_running: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current_index)
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    fn cycles(&self) -> bool {
        self.items.len() > 1
    }

    pub fn next(&mut self) {
        if !self.cycles() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.items.len();
    }

    pub fn prev(&mut self) {
        if !self.cycles() {
            return;
        }
        let len = self.items.len();
        self.current_index = (self.current_index + len - 1) % len;
    }

    /// Clamps out-of-range requests to the last slide.
    pub fn go_to(&mut self, index: usize) -> usize {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.current_index = index.min(last);
        }
        self.current_index
    }

    pub fn offset_percent(&self) -> f64 {
        self.current_index as f64 * 100.0
    }

    pub fn track_style(&self) -> String {
        format!("transform: translateX(-{}%);", self.offset_percent())
    }

    pub fn start(&mut self) -> TimerCommand {
        self.mounted = true;
        self.reschedule()
    }

    pub fn stop(&mut self) -> TimerCommand {
        self.mounted = false;
        self.reschedule()
    }

    pub fn set_paused(&mut self, paused: bool) -> TimerCommand {
        if self.paused == paused {
            return TimerCommand::Keep;
        }

        self.paused = paused;
        self.reschedule()
    }

    pub fn tick(&mut self, token: AutoAdvanceToken) -> bool {
        // Every restart issues a new token; an interval that fires after it
        // was cancelled must not advance.
        if token.0 != self.generation || !self.timer_running || self.paused || !self.cycles() {
            return false;
        }

        self.next();
        true
    }

    fn reschedule(&mut self) -> TimerCommand {
        let should_run = self.mounted && !self.paused && self.cycles();

        if should_run {
            self.generation += 1;
            self.timer_running = true;
            return TimerCommand::Start {
                token: AutoAdvanceToken(self.generation),
                period: self.interval,
            };
        }

        if self.timer_running {
            self.generation += 1;
            self.timer_running = false;
            return TimerCommand::Stop;
        }

        TimerCommand::Keep
    }
}
