use reqwest::Url;

use super::form::{Field, FieldErrors, ProfileForm};
use crate::error::Result;
use crate::model::User;
use crate::navigation::NavAction;
use crate::Agenda;

pub const HEADER_TITLE: &str = "Meu Perfil";
pub const SUBMIT_LABEL: &str = "Confirmar mudanças";

pub const UPDATED_TITLE: &str = "Perfil atualizado com sucesso!";
pub const UPDATE_FAILED_TITLE: &str = "Erro na atualização do perfil";
pub const UPDATE_FAILED_MESSAGE: &str = "Ocorreu um erro ao atualizar seu perfil, tente novamente.";
pub const AVATAR_FAILED: &str = "Erro ao atualizar seu avatar.";

pub const PICKER_TITLE: &str = "Selecione um avatar";
pub const PICKER_CANCEL: &str = "Cancelar";
pub const PICKER_CAMERA: &str = "Usar câmera";
pub const PICKER_LIBRARY: &str = "Escolher da galeria";

/// Where the submission currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Submitting,
}

/// How the last submission ended. The form is [`FormState::Idle`] again
/// after any of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ValidationFailed,
    RequestFailed,
}

/// Profile editing screen.
#[derive(Debug)]
pub struct Profile {
    pub(super) agenda: Agenda,
    pub(super) form: ProfileForm,
    pub(super) errors: FieldErrors,
    pub(super) state: FormState,
    pub(super) last_outcome: Option<Outcome>,
    /// Avatar upload in flight.
    pub(super) uploading: bool,
}

impl Profile {
    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn avatar(&self) -> Option<Url> {
        self.agenda.session().current_user().and_then(|u| u.avatar())
    }
}

/// What the image picker came back with.
#[derive(Clone, Debug)]
pub enum PickerResponse {
    Cancelled,
    Failed(String),
    /// JPEG bytes of the chosen image.
    Picked(Vec<u8>),
}

#[derive(Debug)]
pub enum ProfileInput {
    /// Content of a field changed.
    Change(Field, String),
    /// User pressed the return key in a field.
    SubmitEditing(Field),
    Submit,
    UpdateAvatar(PickerResponse),
    GoBack,
    SignOut,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileOutput {
    Focus(Field),
    /// Show these messages next to their fields.
    Invalid(FieldErrors),
    Alert {
        title: &'static str,
        message: Option<&'static str>,
    },
    Toast(&'static str),
    AvatarUpdated(User),
    Navigate(NavAction),
    SignedOut,
}

#[derive(Debug)]
pub enum ProfileCmd {
    Submitted(Result<User>),
    AvatarUploaded(Result<User>),
}
