use crate::api::ApiClient;
use crate::api::auth::{Credentials, Registration};
use crate::cli::commands::session_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{info, success};

/// `login` and `signup`: authenticate and persist the session.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let client = ApiClient::new(cfg)?;
    let session = match cmd {
        Commands::Login { email, password } => {
            client
                .login(&Credentials {
                    email: email.clone(),
                    password: password.clone(),
                })
                .await?
        }
        Commands::Signup {
            name,
            email,
            password,
        } => {
            client
                .register(&Registration {
                    name: name.clone(),
                    email: email.clone(),
                    password: password.clone(),
                })
                .await?
        }
        _ => return Ok(()),
    };

    session_store(cfg).save(&session)?;
    success(format!("Logged in as {}", display_user(&session)));
    Ok(())
}

pub fn logout(cfg: &Config) -> AppResult<()> {
    if session_store(cfg).clear()? {
        success("Logged out.");
    } else {
        info("No active session.");
    }
    Ok(())
}

pub fn whoami(cfg: &Config) -> AppResult<()> {
    let session = session_store(cfg).load()?;
    if session.is_authenticated() {
        info(format!("Logged in as {}", display_user(&session)));
        if let Some(user) = session.user() {
            println!("  role: {}", user.role.as_str());
        }
    } else {
        info("Not logged in.");
    }
    Ok(())
}

fn display_user(session: &Session) -> String {
    match session.user() {
        Some(u) => format!("{} <{}>", u.name, u.email),
        None => "unknown user".to_string(),
    }
}
