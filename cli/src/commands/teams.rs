//! Team management commands.

use remotehub_cli::error::Result;
use remotehub_link::NewTeam;

use crate::args::TeamsCommand;
use crate::connect::AppContext;

pub async fn handle(context: &AppContext, command: TeamsCommand) -> Result<()> {
    context.require(None)?;

    match command {
        TeamsCommand::List => {
            let teams = context.client.teams().list().await?;
            println!("{}", context.formatter.format_teams(&teams)?);
        }

        TeamsCommand::Show { id } => {
            let team = context.client.teams().get(id).await?;
            print!("{}", context.formatter.format_team(&team)?);
        }

        TeamsCommand::Create { name, description } => {
            let team = context
                .client
                .teams()
                .create(&NewTeam { name, description })
                .await?;
            println!("Created team #{}: {}", team.id, team.name);
        }

        TeamsCommand::Update {
            id,
            name,
            description,
        } => {
            let team = context
                .client
                .teams()
                .update(id, &NewTeam { name, description })
                .await?;
            println!("Updated team #{}: {}", team.id, team.name);
        }

        TeamsCommand::Delete { id } => {
            context.client.teams().delete(id).await?;
            println!("Deleted team #{}.", id);
        }

        TeamsCommand::AddMember { team_id, user_id } => {
            let team = context.client.teams().add_member(team_id, user_id).await?;
            println!(
                "Added user #{} to {} ({} members).",
                user_id,
                team.name,
                team.members.len()
            );
        }

        TeamsCommand::RemoveMember { team_id, user_id } => {
            context
                .client
                .teams()
                .remove_member(team_id, user_id)
                .await?;
            println!("Removed user #{} from team #{}.", user_id, team_id);
        }
    }

    Ok(())
}
