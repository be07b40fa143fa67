use crate::cli::commands::connect;
use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::project::ProjectPayload;
use crate::ui::messages::{header, info, success};
use crate::utils::formatting::{or_dash, wrap_text};
use crate::utils::table::Table;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Projects { action } = cmd else {
        return Ok(());
    };
    let (client, session) = connect(cfg)?;

    match action {
        ProjectAction::List => {
            let projects = client.list_projects(&session).await?;
            if projects.is_empty() {
                info("No projects.");
                return Ok(());
            }
            let mut table = Table::with_headers(&["ID", "Name", "Description"]);
            for p in &projects {
                table.add_row(vec![
                    p.id.clone(),
                    p.name.clone(),
                    or_dash(p.description.as_deref()),
                ]);
            }
            print!("{}", table.render());
        }

        ProjectAction::Show { id } => {
            let project = client.get_project(&session, id).await?;
            header(&project.name);
            println!("  id: {}", project.id);
            if let Some(desc) = &project.description {
                println!();
                println!("{}", wrap_text(desc, 72, "  "));
            }
        }

        ProjectAction::Add { name, description } => {
            let payload = ProjectPayload {
                name: Some(name.clone()),
                description: description.clone(),
            };
            client.create_project(&session, &payload).await?;
            success(format!("Project '{}' created", name.trim()));
        }

        ProjectAction::Update {
            id,
            name,
            description,
        } => {
            let payload = ProjectPayload {
                name: name.clone(),
                description: description.clone(),
            };
            if payload == ProjectPayload::default() {
                info("Nothing to update.");
                return Ok(());
            }
            client.update_project(&session, id, &payload).await?;
            success(format!("Project {id} updated"));
        }

        ProjectAction::Delete { id } => {
            client.delete_project(&session, id).await?;
            success(format!("Project {id} deleted"));
        }
    }

    Ok(())
}
