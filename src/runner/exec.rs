//! The runner: maps generated cases to listener notifications
//!
//! Executes each case under `catch_unwind` so a failed assertion or an
//! execution error in one case never aborts the remaining cases.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use serde::Serialize;

use super::case::TestCase;
use super::generator::TestCaseGenerator;
use super::listener::{CaseFailure, RunListener};
use crate::common::{Error, Result};

/// One failed case in a run summary
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub failure: CaseFailure,
}

/// Result of running a whole suite
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub suite: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseReport>,
}

impl RunSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Drives one generator through one run, notifying listeners per case.
pub struct Runner<G> {
    generator: G,
    listeners: Vec<Box<dyn RunListener>>,
}

impl<G: TestCaseGenerator> Runner<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            listeners: Vec::new(),
        }
    }

    /// Register a notification sink for this run
    pub fn with_listener(mut self, listener: impl RunListener + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Run the suite to completion
    ///
    /// Lifecycle: generate, suite_started, set_up, one started/outcome/
    /// finished triple per case, tear_down, suite_finished. A `set_up`
    /// failure aborts the run without attempting `tear_down`; `tear_down`
    /// runs even when cases failed and its error propagates before
    /// `suite_finished` fires.
    pub fn run(mut self) -> Result<RunSummary> {
        let cases = self
            .generator
            .generate()
            .map_err(|e| Error::Generate(e.to_string()))?;
        let suite = self.generator.suite_name().to_string();
        let total = cases.len();

        for listener in &mut self.listeners {
            listener.suite_started(&suite, total);
        }

        self.generator
            .set_up()
            .map_err(|e| Error::Setup(e.to_string()))?;

        // The default hook would print a backtrace for every failed
        // assertion; suppress panic output while cases run.
        let silencer = SilenceGuard::enter();

        let mut failures = Vec::new();
        let generator = &mut self.generator;
        let listeners = &mut self.listeners;

        for case in &cases {
            for listener in listeners.iter_mut() {
                listener.case_started(&case.name);
            }

            match panic::catch_unwind(AssertUnwindSafe(|| generator.execute(case))) {
                Ok(Ok(())) => {
                    for listener in listeners.iter_mut() {
                        listener.case_succeeded(&case.name);
                    }
                }
                Ok(Err(e)) => {
                    let failure = CaseFailure::Error(e.to_string());
                    report_failure(listeners, &mut failures, case, failure);
                }
                Err(payload) => {
                    let failure = CaseFailure::Assertion(panic_message(payload));
                    report_failure(listeners, &mut failures, case, failure);
                }
            }

            for listener in listeners.iter_mut() {
                listener.case_finished(&case.name);
            }
        }

        drop(silencer);

        self.generator
            .tear_down()
            .map_err(|e| Error::Teardown(e.to_string()))?;

        for listener in &mut self.listeners {
            listener.suite_finished(&suite);
        }

        Ok(RunSummary {
            suite,
            total,
            passed: total - failures.len(),
            failed: failures.len(),
            failures,
        })
    }
}

fn report_failure<E, I>(
    listeners: &mut [Box<dyn RunListener>],
    failures: &mut Vec<CaseReport>,
    case: &TestCase<E, I>,
    failure: CaseFailure,
) {
    for listener in listeners.iter_mut() {
        listener.case_failed(&case.name, &failure);
    }
    failures.push(CaseReport {
        name: case.name.clone(),
        failure,
    });
}

static SILENCER_INIT: Once = Once::new();
static ACTIVE_RUNS: AtomicUsize = AtomicUsize::new(0);

/// Suppresses default panic output while at least one run is in its case
/// loop.
///
/// The panic hook is process-global state, so it is wrapped exactly once:
/// the wrapper delegates to whatever hook was installed before the first
/// run whenever no run is active. Guards only count in and out of the
/// wrapper, which keeps overlapping runs on different threads correct and
/// makes release safe during an unwind (`set_hook` cannot be called from a
/// panicking thread, so a swap-and-restore guard would abort there).
struct SilenceGuard;

impl SilenceGuard {
    fn enter() -> Self {
        SILENCER_INIT.call_once(|| {
            let prev = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                if ACTIVE_RUNS.load(Ordering::SeqCst) == 0 {
                    prev(info);
                }
            }));
        });
        ACTIVE_RUNS.fetch_add(1, Ordering::SeqCst);
        Self
    }
}

impl Drop for SilenceGuard {
    fn drop(&mut self) {
        ACTIVE_RUNS.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Extract a readable message from a panic payload
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "test case panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// What a stubbed case should do when executed
    enum Behavior {
        Pass,
        Panic(&'static str),
        Error(&'static str),
    }

    struct StubGenerator {
        behaviors: Vec<Behavior>,
        fail_set_up: bool,
        fail_generate: bool,
        fail_tear_down: bool,
        set_up_ran: Arc<AtomicBool>,
        tear_down_ran: Arc<AtomicBool>,
    }

    impl StubGenerator {
        fn new(behaviors: Vec<Behavior>) -> Self {
            Self {
                behaviors,
                fail_set_up: false,
                fail_generate: false,
                fail_tear_down: false,
                set_up_ran: Arc::new(AtomicBool::new(false)),
                tear_down_ran: Arc::new(AtomicBool::new(false)),
            }
        }
    }

    impl TestCaseGenerator for StubGenerator {
        type Expected = usize;
        type Input = usize;

        fn suite_name(&self) -> &str {
            "stub"
        }

        fn generate(&mut self) -> Result<Vec<TestCase<usize, usize>>> {
            if self.fail_generate {
                return Err(Error::Internal("generate exploded".to_string()));
            }
            Ok((0..self.behaviors.len())
                .map(|i| TestCase::new("case {input}", i, i))
                .collect())
        }

        fn execute(&mut self, case: &TestCase<usize, usize>) -> Result<()> {
            match self.behaviors[case.input] {
                Behavior::Pass => Ok(()),
                Behavior::Panic(msg) => panic!("{}", msg),
                Behavior::Error(msg) => Err(Error::Internal(msg.to_string())),
            }
        }

        fn set_up(&mut self) -> Result<()> {
            self.set_up_ran.store(true, Ordering::SeqCst);
            if self.fail_set_up {
                return Err(Error::Internal("setup exploded".to_string()));
            }
            Ok(())
        }

        fn tear_down(&mut self) -> Result<()> {
            self.tear_down_ran.store(true, Ordering::SeqCst);
            if self.fail_tear_down {
                return Err(Error::Internal("teardown exploded".to_string()));
            }
            Ok(())
        }
    }

    /// Records every notification as a flat string for order assertions
    #[derive(Clone, Default)]
    struct Recording(Arc<Mutex<Vec<String>>>);

    impl Recording {
        fn events(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl RunListener for Recording {
        fn suite_started(&mut self, suite: &str, total: usize) {
            self.0
                .lock()
                .unwrap()
                .push(format!("suite_started:{suite}:{total}"));
        }
        fn case_started(&mut self, name: &str) {
            self.0.lock().unwrap().push(format!("started:{name}"));
        }
        fn case_succeeded(&mut self, name: &str) {
            self.0.lock().unwrap().push(format!("succeeded:{name}"));
        }
        fn case_failed(&mut self, name: &str, failure: &CaseFailure) {
            self.0
                .lock()
                .unwrap()
                .push(format!("failed:{name}:{failure}"));
        }
        fn case_finished(&mut self, name: &str) {
            self.0.lock().unwrap().push(format!("finished:{name}"));
        }
        fn suite_finished(&mut self, suite: &str) {
            self.0.lock().unwrap().push(format!("suite_finished:{suite}"));
        }
    }

    #[test]
    fn test_notifications_fire_in_order() {
        let recording = Recording::default();
        let generator = StubGenerator::new(vec![Behavior::Pass, Behavior::Pass]);

        let summary = Runner::new(generator)
            .with_listener(recording.clone())
            .run()
            .unwrap();

        assert!(summary.all_passed());
        assert_eq!(
            recording.events(),
            vec![
                "suite_started:stub:2",
                "started:case 0",
                "succeeded:case 0",
                "finished:case 0",
                "started:case 1",
                "succeeded:case 1",
                "finished:case 1",
                "suite_finished:stub",
            ]
        );
    }

    #[test]
    fn test_failing_case_does_not_stop_the_run() {
        let recording = Recording::default();
        let generator = StubGenerator::new(vec![
            Behavior::Pass,
            Behavior::Panic("middle case blew up"),
            Behavior::Pass,
        ]);

        let summary = Runner::new(generator)
            .with_listener(recording.clone())
            .run()
            .unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);

        let events = recording.events();
        assert!(events.contains(&"succeeded:case 2".to_string()));
        assert!(events.contains(&"finished:case 1".to_string()));
    }

    #[test]
    fn test_panic_and_error_are_classified() {
        let generator = StubGenerator::new(vec![
            Behavior::Error("boom"),
            Behavior::Panic("nope"),
        ]);

        let summary = Runner::new(generator).run().unwrap();

        assert_eq!(summary.failed, 2);
        assert!(matches!(
            &summary.failures[0].failure,
            CaseFailure::Error(msg) if msg.contains("boom")
        ));
        assert_eq!(
            summary.failures[1].failure,
            CaseFailure::Assertion("nope".to_string())
        );
    }

    #[test]
    fn test_tear_down_runs_despite_failures() {
        let generator = StubGenerator::new(vec![Behavior::Panic("bad"), Behavior::Pass]);
        let tear_down_ran = generator.tear_down_ran.clone();

        let summary = Runner::new(generator).run().unwrap();

        assert_eq!(summary.failed, 1);
        assert!(tear_down_ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_set_up_failure_skips_cases_and_tear_down() {
        let recording = Recording::default();
        let mut generator = StubGenerator::new(vec![Behavior::Pass]);
        generator.fail_set_up = true;
        let tear_down_ran = generator.tear_down_ran.clone();

        let result = Runner::new(generator).with_listener(recording.clone()).run();

        assert!(matches!(result, Err(Error::Setup(_))));
        assert!(!tear_down_ran.load(Ordering::SeqCst));
        // suite_started fires before set_up, but no case ever does
        assert_eq!(recording.events(), vec!["suite_started:stub:1"]);
    }

    #[test]
    fn test_generate_failure_aborts_before_any_notification() {
        let recording = Recording::default();
        let mut generator = StubGenerator::new(vec![Behavior::Pass]);
        generator.fail_generate = true;
        let set_up_ran = generator.set_up_ran.clone();

        let result = Runner::new(generator).with_listener(recording.clone()).run();

        assert!(matches!(result, Err(Error::Generate(_))));
        assert!(!set_up_ran.load(Ordering::SeqCst));
        assert!(recording.events().is_empty());
    }

    #[test]
    fn test_tear_down_failure_propagates_before_suite_finished() {
        let recording = Recording::default();
        let mut generator = StubGenerator::new(vec![Behavior::Pass]);
        generator.fail_tear_down = true;

        let result = Runner::new(generator).with_listener(recording.clone()).run();

        assert!(matches!(result, Err(Error::Teardown(_))));
        let events = recording.events();
        assert!(events.contains(&"finished:case 0".to_string()));
        assert!(!events.iter().any(|e| e.starts_with("suite_finished")));
    }

    #[test]
    fn test_empty_suite_yields_empty_summary() {
        let recording = Recording::default();
        let generator = StubGenerator::new(Vec::new());

        let summary = Runner::new(generator)
            .with_listener(recording.clone())
            .run()
            .unwrap();

        assert_eq!(summary.total, 0);
        assert!(summary.all_passed());
        assert_eq!(
            recording.events(),
            vec!["suite_started:stub:0", "suite_finished:stub"]
        );
    }
}
