use super::evolution_engine::ProgressCallback;
use crate::engines::evaluation::persistence::Breakdown;
use crate::types::Individual;

/// Prints progress lines and the final report to stdout.
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_new_best(&mut self, iteration: usize, total: usize, best: &Individual) {
        println!("Generation {} of {} yielded {}", iteration, total, best);
    }

    fn on_complete(&mut self, best: &Individual, breakdown: &Breakdown) {
        println!("Best result is {}", best);
        println!("{}", breakdown);
    }
}

/// Discards every notification.
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_new_best(&mut self, _iteration: usize, _total: usize, _best: &Individual) {}

    fn on_complete(&mut self, _best: &Individual, _breakdown: &Breakdown) {}
}
