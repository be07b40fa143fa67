use crate::cli::commands::{connect, parse_optional_day};
use crate::cli::parser::{Commands, TaskAction, TaskFields};
use crate::config::Config;
use crate::core::stats::TaskStats;
use crate::errors::AppResult;
use crate::models::task::{Priority, Status, Task, TaskPayload};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{color_for_priority, color_for_status, colorize};
use crate::utils::date::{format_ymd, today};
use crate::utils::formatting::{or_dash, truncate};
use crate::utils::table::Table;

const TITLE_WIDTH: usize = 40;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Tasks { action } = cmd else {
        return Ok(());
    };
    let (client, session) = connect(cfg)?;

    match action {
        TaskAction::List { status, project } => {
            let status = status.as_deref().map(Status::from_code).transpose()?;
            let tasks: Vec<Task> = client
                .list_tasks(&session)
                .await?
                .into_iter()
                .filter(|t| status.is_none() || t.status == status)
                .filter(|t| {
                    project
                        .as_deref()
                        .is_none_or(|p| t.project_id.as_deref() == Some(p))
                })
                .collect();

            if tasks.is_empty() {
                info("No tasks.");
                return Ok(());
            }
            print!("{}", tasks_table(&tasks).render());
        }

        TaskAction::Add { title, fields } => {
            let mut payload = payload_from(fields)?;
            payload.title = Some(title.clone());
            client.create_task(&session, &payload.normalized()).await?;
            success(format!("Task '{}' created", title.trim()));
        }

        TaskAction::Update { id, title, fields } => {
            let mut payload = payload_from(fields)?;
            payload.title = title.clone();
            let payload = payload.normalized();
            if payload == TaskPayload::default() {
                info("Nothing to update.");
                return Ok(());
            }
            client.update_task(&session, id, &payload).await?;
            success(format!("Task {id} updated"));
        }

        TaskAction::Delete { id } => {
            client.delete_task(&session, id).await?;
            success(format!("Task {id} deleted"));
        }

        TaskAction::Stats => {
            let tasks = client.list_tasks(&session).await?;
            let stats = TaskStats::compute(&tasks, today());
            header("Tasks");
            println!("  Total      : {}", stats.total);
            println!("  Completed  : {}", stats.completed);
            println!("  Due today  : {}", stats.due_today);
            println!("  Overdue    : {}", stats.overdue);
        }
    }

    Ok(())
}

fn payload_from(fields: &TaskFields) -> AppResult<TaskPayload> {
    Ok(TaskPayload {
        title: None,
        description: fields.description.clone(),
        status: fields.status.as_deref().map(Status::from_code).transpose()?,
        priority: fields.priority.as_deref().map(Priority::from_code).transpose()?,
        project_id: fields.project_id.clone(),
        assigned_to: fields.assigned_to.clone(),
        due_date: parse_optional_day(fields.due.as_deref())?,
    })
}

fn tasks_table(tasks: &[Task]) -> Table {
    let mut table = Table::with_headers(&[
        "ID", "Title", "Status", "Priority", "Due", "Project", "Assignee",
    ]);
    for t in tasks {
        let status = t.status.map(|s| s.as_str()).unwrap_or("--");
        let priority = t.priority.map(|p| p.as_str()).unwrap_or("--");
        table.add_row(vec![
            t.id.clone(),
            truncate(&t.title, TITLE_WIDTH),
            colorize(status, color_for_status(status)),
            colorize(priority, color_for_priority(priority)),
            or_dash(t.due_date.map(format_ymd).as_deref()),
            or_dash(t.project_name()),
            or_dash(t.assignee_name()),
        ]);
    }
    table
}
