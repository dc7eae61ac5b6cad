use std::sync::Mutex;

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::view::{EmployeeDashboard, EmployeeDetail, ManagerDashboard};

/// Handed out when a fetch starts; only the latest one may write its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// What a view shows: the last good data plus the latest error, if any.
///
/// Each fetch takes a [`Ticket`]. A result whose ticket is no longer the newest
/// is dropped, so a slow response can't overwrite a newer one. A failed fetch
/// sets `error` and leaves `data` as it was.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
    #[serde(skip)]
    generation: u64,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            generation: 0,
        }
    }
}

impl<T> ViewState<T> {
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Returns false when the result was stale and discarded.
    pub fn apply(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.generation, "Discarding stale result");
            return false;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    /// Appends to the current data in place; used for records created locally.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        if let Some(data) = self.data.as_mut() {
            f(data);
        }
    }
}

/// Per-view state shared by the dashboard handlers.
#[derive(Default)]
pub struct DashboardState {
    pub employee: Mutex<ViewState<EmployeeDashboard>>,
    pub manager: Mutex<ViewState<ManagerDashboard>>,
    pub detail: Mutex<ViewState<EmployeeDetail>>,
}

impl DashboardState {
    /// Forgets everything shown so far; in-flight fetches become stale.
    pub fn reset(&self) {
        reset(&self.employee);
        reset(&self.manager);
        reset(&self.detail);
    }
}

fn reset<T>(cell: &Mutex<ViewState<T>>) {
    let mut state = cell.lock().expect("view state poisoned");
    let generation = state.generation + 1;
    *state = ViewState {
        generation,
        ..ViewState::default()
    };
}
