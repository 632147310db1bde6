//! Named-task stopwatch
//!
//! Measures consecutive tasks; starting a task stops the previous one.
//! The breakdown is reported through the `log` facade at info level.

use std::time::{Duration, Instant};

use log::info;

/// Wall-clock timing of consecutive named tasks
#[derive(Debug)]
pub struct StopWatch {
    name: String,
    tasks: Vec<(String, Duration)>,
    current: Option<(String, Instant)>,
}

impl StopWatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
            current: None,
        }
    }

    /// Stop the running task, if any, and start `task`.
    pub fn start(&mut self, task: impl Into<String>) {
        self.stop();
        self.current = Some((task.into(), Instant::now()));
    }

    /// Stop the running task, if any.
    pub fn stop(&mut self) {
        if let Some((task, t0)) = self.current.take() {
            self.tasks.push((task, t0.elapsed()));
        }
    }

    /// Completed tasks with their durations, in start order
    pub fn tasks(&self) -> &[(String, Duration)] {
        &self.tasks
    }

    pub fn total(&self) -> Duration {
        self.tasks.iter().map(|(_, d)| *d).sum()
    }

    /// Stop the running task and log the breakdown.
    pub fn print(&mut self) {
        self.stop();
        let total_ms = self.total().as_secs_f64() * 1000.0;
        info!("{}: total_ms={:.3}", self.name, total_ms);
        for (task, elapsed) in &self.tasks {
            let ms = elapsed.as_secs_f64() * 1000.0;
            let pct = if total_ms > 0.0 { 100.0 * ms / total_ms } else { 0.0 };
            info!("  {:<20} {:>10.3} ms {:>5.1}%", task, ms, pct);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_in_order() {
        let mut watch = StopWatch::new("test");
        watch.start("first");
        watch.start("second");
        assert_eq!(watch.tasks().len(), 1);
        watch.print();
        let names: Vec<&str> = watch.tasks().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
        watch.stop();
        assert_eq!(watch.tasks().len(), 2);
    }
}
