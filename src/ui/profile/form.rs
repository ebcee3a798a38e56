use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};
use validator::ValidateEmail;

use crate::api::{PasswordChange, ProfileUpdate};
use crate::model::User;

pub const NAME_REQUIRED: &str = "Nome obrigatório";
pub const EMAIL_REQUIRED: &str = "E-mail obrigatório";
pub const EMAIL_INVALID: &str = "Digite um e-mail válido";
pub const FIELD_REQUIRED: &str = "Campo obrigatório.";
pub const PASSWORD_TOO_SHORT: &str = "No mínimo 6 dígitos";
pub const CONFIRMATION_MISMATCH: &str = "Confirmação incorreta";

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Inputs of the profile form, in the order focus moves through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    OldPassword,
    Password,
    PasswordConfirmation,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::OldPassword,
        Field::Password,
        Field::PasswordConfirmation,
    ];

    /// Name of the field in the request body.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::OldPassword => "old_password",
            Field::Password => "password",
            Field::PasswordConfirmation => "password_confirmation",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Email => "E-mail",
            Field::OldPassword => "Senha atual",
            Field::Password => "Senha",
            Field::PasswordConfirmation => "Confirmar senha",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(
            self,
            Field::OldPassword | Field::Password | Field::PasswordConfirmation
        )
    }

    /// Field receiving focus when the user finishes editing this one,
    /// `None` for the last one, which submits the form instead.
    pub fn next(self) -> Option<Field> {
        match self {
            Field::Name => Some(Field::Email),
            Field::Email => Some(Field::OldPassword),
            Field::OldPassword => Some(Field::Password),
            Field::Password => Some(Field::PasswordConfirmation),
            Field::PasswordConfirmation => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub old_password: SecretString,
    pub password: SecretString,
    pub password_confirmation: SecretString,
}

impl Default for ProfileForm {
    fn default() -> Self {
        ProfileForm {
            name: String::new(),
            email: String::new(),
            old_password: SecretString::new(String::new()),
            password: SecretString::new(String::new()),
            password_confirmation: SecretString::new(String::new()),
        }
    }
}

impl ProfileForm {
    /// Form pre-filled with what we know about `user`, passwords empty.
    pub fn from_user(user: &User) -> ProfileForm {
        ProfileForm {
            name: user.name.clone(),
            email: user.email.clone(),
            ..ProfileForm::default()
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::OldPassword => self.old_password = SecretString::new(value),
            Field::Password => self.password = SecretString::new(value),
            Field::PasswordConfirmation => self.password_confirmation = SecretString::new(value),
        }
    }

    /// User wants to change the password, which is signalled by filling in
    /// the current one.
    pub fn changes_password(&self) -> bool {
        !self.old_password.expose_secret().is_empty()
    }
}

/// Validation messages by field, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: Field) -> Option<&'static str> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }
}

impl FromIterator<(Field, &'static str)> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = (Field, &'static str)>>(iter: T) -> Self {
        FieldErrors(iter.into_iter().collect())
    }
}

/// A rule looks at the whole form and complains about one field.
type Rule = fn(&ProfileForm) -> Option<&'static str>;

fn name_required(form: &ProfileForm) -> Option<&'static str> {
    form.name.is_empty().then_some(NAME_REQUIRED)
}

fn email_required(form: &ProfileForm) -> Option<&'static str> {
    form.email.is_empty().then_some(EMAIL_REQUIRED)
}

fn email_syntax(form: &ProfileForm) -> Option<&'static str> {
    (!form.email.validate_email()).then_some(EMAIL_INVALID)
}

fn new_password_rule(form: &ProfileForm, value: &SecretString) -> Option<&'static str> {
    if !form.changes_password() {
        return None;
    }

    let value = value.expose_secret();
    if value.is_empty() {
        Some(FIELD_REQUIRED)
    } else if value.chars().count() < MIN_PASSWORD_LENGTH {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

fn password_required(form: &ProfileForm) -> Option<&'static str> {
    new_password_rule(form, &form.password)
}

fn confirmation_required(form: &ProfileForm) -> Option<&'static str> {
    new_password_rule(form, &form.password_confirmation)
}

fn confirmation_matches(form: &ProfileForm) -> Option<&'static str> {
    let mismatch = form.password_confirmation.expose_secret() != form.password.expose_secret();
    (form.changes_password() && mismatch).then_some(CONFIRMATION_MISMATCH)
}

const NAME_RULES: &[Rule] = &[name_required];
const EMAIL_RULES: &[Rule] = &[email_required, email_syntax];
const PASSWORD_RULES: &[Rule] = &[password_required];
const CONFIRMATION_RULES: &[Rule] = &[confirmation_required, confirmation_matches];

/// Rules of a field, the first failing one provides the message.
fn rules(field: Field) -> &'static [Rule] {
    match field {
        Field::Name => NAME_RULES,
        Field::Email => EMAIL_RULES,
        Field::OldPassword => &[],
        Field::Password => PASSWORD_RULES,
        Field::PasswordConfirmation => CONFIRMATION_RULES,
    }
}

/// Checks the whole form and reports every field that is wrong.
pub fn validate(form: &ProfileForm) -> Result<(), FieldErrors> {
    let errors: FieldErrors = Field::ALL
        .into_iter()
        .filter_map(|field| {
            rules(field)
                .iter()
                .find_map(|rule| rule(form))
                .map(|message| (field, message))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Request body for `form`. Password fields are only included when the
/// user filled in the current password.
pub fn build_payload(form: &ProfileForm) -> ProfileUpdate {
    let password = form.changes_password().then(|| PasswordChange {
        old_password: form.old_password.clone(),
        password: form.password.clone(),
        password_confirmation: form.password_confirmation.clone(),
    });

    ProfileUpdate {
        name: form.name.clone(),
        email: form.email.clone(),
        password,
    }
}
