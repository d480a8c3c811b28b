use std::time::Duration;

/// Blocks the driving loop between frames
pub trait Pacer {
    fn pace(&mut self, frame: Duration);
}

/// Plain thread sleep; no cancellation
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pace(&mut self, frame: Duration) {
        std::thread::sleep(frame);
    }
}

/// Returns immediately; for tests and benchmarks
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pace(&mut self, _frame: Duration) {}
}
