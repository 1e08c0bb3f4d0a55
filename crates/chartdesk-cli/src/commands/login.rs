//! Sign-in, sign-out, and identity commands.

use crate::prompt;
use anyhow::Result;
use chartdesk_application::SessionStore;
use chartdesk_core::error::ChartdeskError;

pub async fn login(session: &SessionStore, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt::read_line("Password: ")?,
    };

    match session.login(email, &password).await {
        Ok(active) => println!("Signed in as {}", active.user.email),
        Err(ChartdeskError::InvalidCredentials) => println!("Invalid email or password."),
        Err(e) => {
            tracing::error!("Sign-in failed: {e}");
            println!("Sign-in failed. Please try again.");
        }
    }
    Ok(())
}

pub async fn logout(session: &SessionStore) -> Result<()> {
    if session.current().is_none() {
        println!("Not signed in.");
        return Ok(());
    }
    session.logout().await;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(session: &SessionStore) -> Result<()> {
    match session.current() {
        Some(active) => println!("{} ({})", active.user.email, active.user.id),
        None => println!("Not signed in."),
    }
    Ok(())
}
