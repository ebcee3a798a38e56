use tracing::warn;

use crate::error::Result;
use crate::format::{describe_appointment, local_time};
use crate::model::Provider;
use crate::navigation::{ConfirmationParams, NavAction};
use crate::ui::memo::Memo;
use crate::Agenda;

pub const TITLE: &str = "Agendamento concluído";
pub const OK_LABEL: &str = "Ok";

/// Screen confirming a freshly booked appointment.
#[derive(Debug)]
pub struct AppointmentCreated {
    pub(super) agenda: Agenda,
    pub(super) params: ConfirmationParams,
    /// `None` until providers arrive, and also when none matches.
    pub(super) provider: Option<Provider>,
    pub(super) description: Memo<(Option<String>, i64), String>,
}

impl AppointmentCreated {
    pub fn params(&self) -> &ConfirmationParams {
        &self.params
    }

    pub fn provider(&self) -> Option<&Provider> {
        self.provider.as_ref()
    }

    /// Confirmation sentence, recomputed only when the provider name or the
    /// date changes.
    pub fn description(&mut self) -> &str {
        let key = (self.provider.as_ref().map(|p| p.name.clone()), self.params.date);
        let offset = self.agenda.config().utc_offset();

        self.description.get_or_compute(key, |(name, date)| {
            match local_time(*date, offset) {
                Some(date) => describe_appointment(&date, name.as_deref()),
                None => {
                    warn!("Appointment date {} is out of range", date);
                    String::new()
                }
            }
        })
    }
}

/// First provider with the given `provider_id`.
pub fn find_provider(providers: Vec<Provider>, provider_id: &str) -> Option<Provider> {
    providers.into_iter().find(|p| p.id == provider_id)
}

pub struct AppointmentCreatedInit {
    pub agenda: Agenda,
    pub params: ConfirmationParams,
}

#[derive(Debug)]
pub enum AppointmentCreatedInput {
    /// Fetch providers and pick the one from the params. Sent on init.
    Load,
    /// User acknowledged, leave the booking flow for good.
    Confirm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppointmentCreatedOutput {
    /// Description changed and should be shown.
    Rendered { description: String },
    Navigate(NavAction),
}

#[derive(Debug)]
pub enum AppointmentCreatedCmd {
    Providers(Result<Vec<Provider>>),
}
