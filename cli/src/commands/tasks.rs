//! Task management commands.

use remotehub_cli::error::{CLIError, Result};
use remotehub_link::{NewTask, TaskPriority};

use crate::args::TasksCommand;
use crate::connect::AppContext;

fn parse_priority(value: &str) -> Result<TaskPriority> {
    value
        .parse()
        .map_err(|e| CLIError::InputError(format!("{}. Valid values: low, medium, high", e)))
}

pub async fn handle(context: &AppContext, command: TasksCommand) -> Result<()> {
    context.require(None)?;

    match command {
        TasksCommand::List {
            limit,
            team,
            user,
            active,
        } => {
            let tasks = match (team, user) {
                (Some(team_id), _) if active => {
                    context.client.tasks().list_active_by_team(team_id).await?
                }
                (Some(team_id), _) => context.client.tasks().list_by_team(team_id).await?,
                (None, Some(user_id)) => {
                    context.client.tasks().list_active_by_user(user_id).await?
                }
                (None, None) => context.client.tasks().list(limit).await?,
            };
            println!("{}", context.formatter.format_tasks(&tasks)?);
        }

        TasksCommand::Mine => {
            let me = context.client.users().me().await?;
            let user_id = me.id.ok_or_else(|| {
                CLIError::InputError("The server did not return your user id".to_string())
            })?;
            let tasks = context.client.tasks().list_active_by_user(user_id).await?;
            println!("{}", context.formatter.format_tasks(&tasks)?);
        }

        TasksCommand::Show { id } => {
            let task = context.client.tasks().get(id).await?;
            print!("{}", context.formatter.format_task(&task)?);
        }

        TasksCommand::Create {
            title,
            team,
            description,
            priority,
            deadline,
            assignee,
        } => {
            let priority = priority.as_deref().map(parse_priority).transpose()?;
            let task = context
                .client
                .tasks()
                .create(
                    team,
                    &NewTask {
                        title,
                        description,
                        priority,
                        deadline,
                        assigned_to_id: assignee,
                    },
                )
                .await?;
            println!("Created task #{}: {}", task.id, task.title);
        }

        TasksCommand::Update {
            id,
            title,
            description,
            priority,
            deadline,
            assignee,
        } => {
            let priority = priority.as_deref().map(parse_priority).transpose()?;
            let task = context
                .client
                .tasks()
                .update(
                    id,
                    &NewTask {
                        title,
                        description,
                        priority,
                        deadline,
                        assigned_to_id: assignee,
                    },
                )
                .await?;
            println!("Updated task #{}: {}", task.id, task.title);
        }

        TasksCommand::Delete { id } => {
            context.client.tasks().delete(id).await?;
            println!("Deleted task #{}.", id);
        }

        TasksCommand::Assign { id, user_id } => {
            let task = context.client.tasks().assign(id, user_id).await?;
            println!(
                "Assigned task #{} to {}.",
                task.id,
                task.assigned_to
                    .as_ref()
                    .map(|user| user.username.clone())
                    .unwrap_or_else(|| format!("user #{}", user_id))
            );
        }

        TasksCommand::Complete { id } => {
            let task = context.client.tasks().complete(id).await?;
            println!("Completed task #{}: {}", task.id, task.title);
        }

        TasksCommand::Certify { id } => {
            let task = context.client.tasks().certify(id).await?;
            println!("Certified task #{}: {}", task.id, task.title);
        }
    }

    Ok(())
}
