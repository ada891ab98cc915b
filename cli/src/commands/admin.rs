//! Administrator commands.

use remotehub_cli::error::Result;
use remotehub_link::Role;

use crate::args::AdminCommand;
use crate::connect::AppContext;

pub async fn handle(context: &AppContext, command: AdminCommand) -> Result<()> {
    match command {
        AdminCommand::Users => {
            context.require(Some(Role::Admin))?;
            let users = context.client.admin().list_users().await?;
            println!("{}", context.formatter.format_users(&users)?);
        }

        AdminCommand::DeleteUser { id } => {
            context.require(Some(Role::Admin))?;
            context.client.admin().delete_user(id).await?;
            println!("Deleted user #{}.", id);
        }

        AdminCommand::AddMember { team_id, user_id } => {
            // The server accepts team leads here as well as admins, so
            // only sign-in is checked locally.
            context.require(None)?;
            let team = context.client.admin().add_team_member(team_id, user_id).await?;
            println!(
                "Added user #{} to {} ({} members).",
                user_id,
                team.name,
                team.members.len()
            );
        }
    }

    Ok(())
}
