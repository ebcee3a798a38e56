use tracing::{info, warn};

use super::model::*;
use crate::navigation::{NavAction, Route};
use crate::ui::component::{Component, ComponentSender};
use crate::ui::memo::Memo;

impl Component for AppointmentCreated {
    type Init = AppointmentCreatedInit;
    type Input = AppointmentCreatedInput;
    type Output = AppointmentCreatedOutput;
    type CommandOutput = AppointmentCreatedCmd;

    fn init(init: Self::Init, sender: &ComponentSender<Self>) -> Self {
        sender.input(AppointmentCreatedInput::Load);

        AppointmentCreated {
            agenda: init.agenda,
            params: init.params,
            provider: None,
            description: Memo::default(),
        }
    }

    fn update(&mut self, message: Self::Input, sender: &ComponentSender<Self>) {
        match message {
            AppointmentCreatedInput::Load => {
                let backend = self.agenda.backend().clone();
                sender.oneshot_command(async move {
                    AppointmentCreatedCmd::Providers(backend.providers().await)
                });
            }
            AppointmentCreatedInput::Confirm => sender
                .output(AppointmentCreatedOutput::Navigate(NavAction::Reset(
                    Route::Dashboard,
                )))
                .unwrap_or_default(),
        }
    }

    fn update_cmd(&mut self, message: Self::CommandOutput, sender: &ComponentSender<Self>) {
        match message {
            AppointmentCreatedCmd::Providers(Ok(providers)) => {
                let provider_id = &self.params.provider_id;
                self.provider = find_provider(providers, provider_id);

                match &self.provider {
                    Some(p) => info!("Appointment provider {} is {}", p.id, p.name),
                    None => warn!("Provider {} not among providers, showing without name", provider_id),
                }
            }
            AppointmentCreatedCmd::Providers(Err(e)) => {
                // Description still renders, just without the name.
                warn!("Could not load providers: {}", e);
            }
        }

        let description = self.description().to_string();
        sender
            .output(AppointmentCreatedOutput::Rendered { description })
            .unwrap_or_default();
    }
}
