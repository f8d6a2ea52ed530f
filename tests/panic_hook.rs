//! Panic-hook behavior across runs
//!
//! The runner suppresses default panic output while cases execute. The
//! hook that was in effect before any run must be in effect again once no
//! run is active, even when runs overlap on threads or a listener panics
//! mid-run. Kept in its own test binary because the panic hook is
//! process-global.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use dyntest::runner::RunListener;
use dyntest::{Result, Runner, TestCase, TestCaseGenerator};

/// Six cases, the odd ones failing, each slow enough that parallel runs
/// overlap in their case loops
struct SlowMixed;

impl TestCaseGenerator for SlowMixed {
    type Expected = u32;
    type Input = u32;

    fn suite_name(&self) -> &str {
        "slow-mixed"
    }

    fn generate(&mut self) -> Result<Vec<TestCase<u32, u32>>> {
        Ok((1..=6).map(|i| TestCase::new("case {input}", i, i)).collect())
    }

    fn execute(&mut self, case: &TestCase<u32, u32>) -> Result<()> {
        thread::sleep(Duration::from_millis(5));
        assert!(case.input % 2 == 0, "odd input {}", case.input);
        Ok(())
    }
}

/// Panics on the first case notification, unwinding out of `run()`
struct PanickyListener;

impl RunListener for PanickyListener {
    fn case_started(&mut self, _name: &str) {
        panic!("listener blew up");
    }
}

static SENTINEL_FIRED: AtomicBool = AtomicBool::new(false);

#[test]
fn hook_installed_before_runs_is_in_effect_after_them() {
    panic::set_hook(Box::new(|_| {
        SENTINEL_FIRED.store(true, Ordering::SeqCst);
    }));

    // Several runs overlapping on threads; failing cases panic internally
    // but the sentinel must not be disturbed once they all finish.
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| Runner::new(SlowMixed).run().unwrap()))
        .collect();
    for handle in handles {
        let summary = handle.join().unwrap();
        assert_eq!(summary.total, 6);
        assert_eq!(summary.failed, 3);
    }

    // A panicking listener unwinds out of run() mid-loop; the guard must
    // still be released on that path.
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        Runner::new(SlowMixed).with_listener(PanickyListener).run()
    }));
    assert!(result.is_err());

    // With no run active, a panic reaches the hook installed up top.
    let _ = panic::catch_unwind(|| panic!("hook check"));
    assert!(
        SENTINEL_FIRED.load(Ordering::SeqCst),
        "panic hook installed before the runs was lost"
    );
}
