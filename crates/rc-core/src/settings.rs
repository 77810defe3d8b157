//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**, the date at which
//! calculations are performed, and whether cash flows falling on that date
//! still count.  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! Thread safety: the state is stored behind a `Mutex` so that it can be
//! changed from any thread.  Code that changes the evaluation date should
//! restore it when done, typically through [`ScopedEvaluationDate`].

use std::sync::{Mutex, MutexGuard, OnceLock};

#[derive(Debug, Default, Clone, Copy)]
struct State {
    evaluation_date: Option<i32>,
    include_reference_date_events: bool,
}

/// Process-wide settings used by the ratecurve library.
///
/// The evaluation date is stored as a date serial number (days since the
/// epoch used by `rc_time::Date`), so this crate does not depend on the
/// date type itself.
#[derive(Debug)]
pub struct Settings {
    state: Mutex<State>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            state: Mutex::new(State::default()),
        })
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // Plain data: a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Return the current evaluation date serial number, or `None` if no
    /// evaluation date has been set.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        self.lock().evaluation_date
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        self.lock().evaluation_date = Some(serial);
    }

    /// Clear the evaluation date.
    pub fn reset_evaluation_date(&self) {
        self.lock().evaluation_date = None;
    }

    /// Whether cash flows falling exactly on the evaluation date count as
    /// not yet occurred.  Defaults to `false`.
    pub fn include_reference_date_events(&self) -> bool {
        self.lock().include_reference_date_events
    }

    /// Set whether cash flows on the evaluation date are still counted.
    pub fn set_include_reference_date_events(&self, flag: bool) {
        self.lock().include_reference_date_events = flag;
    }
}

/// RAII guard that sets the evaluation date and restores the previous value
/// when dropped.
#[derive(Debug)]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Set the global evaluation date to `serial` for the guard's lifetime.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}
