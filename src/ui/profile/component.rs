use tracing::{debug, info, warn};

use super::form::{build_payload, validate, FieldErrors, ProfileForm};
use super::model::*;
use crate::api::AvatarUpload;
use crate::error::Result;
use crate::model::User;
use crate::navigation::NavAction;
use crate::session::Session;
use crate::ui::component::{Component, ComponentSender};

impl Component for Profile {
    type Init = crate::Agenda;
    type Input = ProfileInput;
    type Output = ProfileOutput;
    type CommandOutput = ProfileCmd;

    fn init(agenda: Self::Init, _sender: &ComponentSender<Self>) -> Self {
        let form = match agenda.session().current_user() {
            Some(user) => ProfileForm::from_user(&user),
            None => {
                warn!("Editing profile with nobody signed in");
                ProfileForm::default()
            }
        };

        Profile {
            agenda,
            form,
            errors: FieldErrors::default(),
            state: FormState::Idle,
            last_outcome: None,
            uploading: false,
        }
    }

    fn update(&mut self, message: Self::Input, sender: &ComponentSender<Self>) {
        match message {
            ProfileInput::Change(field, value) => {
                debug!("Profile field {} changed", field.name());
                self.form.set(field, value);
                self.errors.remove(field);
            }

            ProfileInput::SubmitEditing(field) => match field.next() {
                Some(next) => sender.output(ProfileOutput::Focus(next)).unwrap_or_default(),
                None => sender.input(ProfileInput::Submit),
            },

            ProfileInput::Submit => self.submit(sender),

            ProfileInput::UpdateAvatar(response) => self.update_avatar(response, sender),

            ProfileInput::GoBack => sender
                .output(ProfileOutput::Navigate(NavAction::GoBack))
                .unwrap_or_default(),

            ProfileInput::SignOut => {
                self.agenda.session().sign_out();
                sender.output(ProfileOutput::SignedOut).unwrap_or_default();
            }
        }
    }

    fn update_cmd(&mut self, message: Self::CommandOutput, sender: &ComponentSender<Self>) {
        match message {
            ProfileCmd::Submitted(Ok(user)) => {
                info!("Profile of {} updated", user.id);
                self.finish(Outcome::Success);

                sender
                    .output(ProfileOutput::Alert {
                        title: UPDATED_TITLE,
                        message: None,
                    })
                    .unwrap_or_default();
                sender
                    .output(ProfileOutput::Navigate(NavAction::GoBack))
                    .unwrap_or_default();
            }

            ProfileCmd::Submitted(Err(e)) => {
                warn!("Profile update failed: {}", e);
                self.finish(Outcome::RequestFailed);

                sender
                    .output(ProfileOutput::Alert {
                        title: UPDATE_FAILED_TITLE,
                        message: Some(UPDATE_FAILED_MESSAGE),
                    })
                    .unwrap_or_default();
            }

            ProfileCmd::AvatarUploaded(Ok(user)) => {
                info!("Avatar of {} updated", user.id);
                self.uploading = false;

                sender
                    .output(ProfileOutput::AvatarUpdated(user))
                    .unwrap_or_default();
            }

            ProfileCmd::AvatarUploaded(Err(e)) => {
                warn!("Avatar upload failed: {}", e);
                self.uploading = false;

                sender
                    .output(ProfileOutput::Toast(AVATAR_FAILED))
                    .unwrap_or_default();
            }
        }
    }
}

impl Profile {
    /// Validates the form and, when it holds up, sends it in the background.
    fn submit(&mut self, sender: &ComponentSender<Self>) {
        if self.state != FormState::Idle {
            debug!("Profile submission already in flight, ignoring");
            return;
        }

        self.state = FormState::Validating;
        self.errors = FieldErrors::default();

        if let Err(errors) = validate(&self.form) {
            debug!("Profile form has {} invalid fields", errors.len());
            self.errors = errors.clone();
            self.finish(Outcome::ValidationFailed);
            sender
                .output(ProfileOutput::Invalid(errors))
                .unwrap_or_default();
            return;
        }

        self.state = FormState::Submitting;

        let payload = build_payload(&self.form);
        let backend = self.agenda.backend().clone();
        let session = self.agenda.session().clone();
        sender.oneshot_command(async move {
            let result = backend.update_profile(&payload).await;
            ProfileCmd::Submitted(store_user(&session, result))
        });
    }

    fn update_avatar(&mut self, response: PickerResponse, sender: &ComponentSender<Self>) {
        let bytes = match response {
            PickerResponse::Cancelled => return,
            PickerResponse::Failed(reason) => {
                warn!("Image picker failed: {}", reason);
                sender
                    .output(ProfileOutput::Toast(AVATAR_FAILED))
                    .unwrap_or_default();
                return;
            }
            PickerResponse::Picked(bytes) => bytes,
        };

        if self.uploading {
            debug!("Avatar upload already in flight, ignoring");
            return;
        }

        let user = match self.agenda.session().require_user() {
            Ok(user) => user,
            Err(e) => {
                warn!("Cannot upload avatar: {}", e);
                sender
                    .output(ProfileOutput::Toast(AVATAR_FAILED))
                    .unwrap_or_default();
                return;
            }
        };

        self.uploading = true;

        let upload = AvatarUpload {
            user_id: user.id,
            bytes,
        };
        let backend = self.agenda.backend().clone();
        let session = self.agenda.session().clone();
        sender.oneshot_command(async move {
            let result = backend.update_avatar(upload).await;
            ProfileCmd::AvatarUploaded(store_user(&session, result))
        });
    }

    fn finish(&mut self, outcome: Outcome) {
        debug!("Profile submission finished: {:?}", outcome);
        self.last_outcome = Some(outcome);
        self.state = FormState::Idle;
    }
}

/// Puts the user the backend answered with into the session. Runs inside the
/// command, so the session is current even when the screen is already gone.
fn store_user(session: &Session, result: Result<User>) -> Result<User> {
    result.map(|user| {
        session.replace_user(user.clone());
        user
    })
}
