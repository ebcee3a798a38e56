//! Just enough of a navigation stack for the screens to express where the
//! user goes next. The shell owns the real router and mirrors what
//! [`Navigator`] holds.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters the booking flow hands to the confirmation screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationParams {
    pub provider_id: String,
    /// Appointment time as milliseconds since the Unix epoch.
    pub date: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    CreateAppointment { provider_id: String },
    AppointmentCreated(ConfirmationParams),
    Profile,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::CreateAppointment { .. } => "CreateAppointment",
            Route::AppointmentCreated(_) => "AppointmentCreated",
            Route::Profile => "Profile",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Push(Route),
    GoBack,
    /// Replace the whole history with a single route.
    Reset(Route),
}

#[derive(Debug)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(root: Route) -> Navigator {
        Navigator {
            history: vec![root],
        }
    }

    pub fn current(&self) -> &Route {
        // History is never empty: `go_back` keeps the root and `reset`
        // always installs one route.
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn push(&mut self, route: Route) {
        debug!("Navigating to {}", route.name());
        self.history.push(route);
    }

    /// Pops the current route. Returns `false` when already at the root.
    pub fn go_back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, route: Route) {
        debug!("Resetting navigation to {}", route.name());
        self.history.clear();
        self.history.push(route);
    }

    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Push(route) => self.push(route),
            NavAction::GoBack => {
                self.go_back();
            }
            NavAction::Reset(route) => self.reset(route),
        }
    }
}
