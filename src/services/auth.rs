//! Sign-in and registration. Forms are validated before any request is sent.

use super::session::AuthSession;
use super::validation::{LoginForm, RegisterForm};
use crate::api::{ApiClient, Transport};
use crate::common::AuthError;

pub async fn login<T: Transport>(
    client: &ApiClient<T>,
    form: &LoginForm,
) -> Result<AuthSession, AuthError> {
    let request = form.validate()?;
    let response = client.login(&request).await?;

    log::info!("Signed in as {}", response.user.email);

    Ok(response.into())
}

pub async fn register<T: Transport>(
    client: &ApiClient<T>,
    form: &RegisterForm,
) -> Result<AuthSession, AuthError> {
    let request = form.validate()?;
    let response = client.register(&request).await?;

    log::info!("Registered {}", response.user.email);

    Ok(response.into())
}
