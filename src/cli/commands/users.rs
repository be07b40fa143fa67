use crate::cli::commands::connect;
use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::user::{Role, UserPayload};
use crate::ui::messages::{info, success};
use crate::utils::formatting::or_dash;
use crate::utils::table::Table;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Users { action } = cmd else {
        return Ok(());
    };
    let (client, session) = connect(cfg)?;

    match action {
        UserAction::List => {
            let users = client.list_users(&session).await?;
            if users.is_empty() {
                info("No users.");
                return Ok(());
            }
            let mut table = Table::with_headers(&["ID", "Name", "Email", "Role"]);
            for u in &users {
                table.add_row(vec![
                    or_dash(u.id.as_deref()),
                    u.name.clone(),
                    u.email.clone(),
                    u.role.as_str().to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        UserAction::Add {
            name,
            email,
            password,
            role,
        } => {
            let payload = UserPayload {
                name: Some(name.clone()),
                email: Some(email.clone()),
                password: Some(password.clone()),
                role: role.as_deref().map(Role::from_code).transpose()?,
            };
            client.create_user(&session, &payload).await?;
            success(format!("User {email} created"));
        }

        UserAction::Update {
            id,
            name,
            email,
            password,
            role,
        } => {
            let payload = UserPayload {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
                role: role.as_deref().map(Role::from_code).transpose()?,
            };
            if payload == UserPayload::default() {
                info("Nothing to update.");
                return Ok(());
            }
            client.update_user(&session, id, &payload).await?;
            success(format!("User {id} updated"));
        }

        UserAction::Delete { id } => {
            client.delete_user(&session, id).await?;
            success(format!("User {id} deleted"));
        }
    }

    Ok(())
}
