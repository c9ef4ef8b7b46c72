//! Fixed durations used by the registration UI.

use std::time::Duration;

/// How long an input or the submit control shakes after a rejection.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// How long the failure notification stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Round-trip time of the simulated registration call.
pub const SIMULATED_REGISTRATION_DELAY: Duration = Duration::from_secs(2);

/// Text of the transient notification shown when registration fails.
pub const FAILURE_NOTICE: &str = "Registration failed. Please try again.";
