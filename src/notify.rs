//! Desktop notifications for phase changes

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use notify_rust::Notification;
use tracing::debug;

use crate::state::Mode;

const APP_NAME: &str = "take-five";
const CONFIRMATION: &str = "Awesome! You will be notified at the start of each session";

/// Handle for sending phase-change notifications.
///
/// Availability is probed once at startup with a confirmation toast, which
/// doubles as the permission request on platforms that gate notifications.
/// If that probe fails, later announcements are skipped instead of retried.
#[derive(Debug, Clone)]
pub struct Notifier {
    available: Arc<AtomicBool>,
}

impl Notifier {
    /// Probe the notification service and confirm to the user that phase
    /// announcements are on. Runs off the async runtime since desktop
    /// notification calls can block on the session bus.
    pub fn start_probe() -> Self {
        let available = Arc::new(AtomicBool::new(false));
        let flag = available.clone();
        tokio::task::spawn_blocking(move || match show(CONFIRMATION) {
            Ok(()) => {
                flag.store(true, Ordering::Release);
                debug!("Notification service is available");
            }
            Err(e) => {
                debug!("Notifications disabled: {}", e);
            }
        });
        Self { available }
    }

    /// A notifier that never announces anything.
    pub fn disabled() -> Self {
        Self {
            available: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Announce the phase that just started. Failures are logged and
    /// swallowed; the timer keeps running without notifications.
    pub fn announce(&self, next: Mode) {
        if !self.available.load(Ordering::Acquire) {
            return;
        }
        tokio::task::spawn_blocking(move || {
            if let Err(e) = show(next.notification_text()) {
                debug!("Failed to send notification: {}", e);
            }
        });
    }
}

fn show(text: &str) -> notify_rust::error::Result<()> {
    Notification::new().appname(APP_NAME).summary(text).show()?;
    Ok(())
}
