//! User browsing and profile commands.

use remotehub_cli::error::{CLIError, Result};
use remotehub_cli::helpers::validate_email;
use remotehub_link::ProfileUpdate;

use crate::args::UsersCommand;
use crate::connect::AppContext;

pub async fn handle(context: &AppContext, command: UsersCommand) -> Result<()> {
    context.require(None)?;

    match command {
        UsersCommand::List => {
            let users = context.client.users().list().await?;
            println!("{}", context.formatter.format_users(&users)?);
        }

        UsersCommand::Show { id } => {
            let user = context.client.users().get(id).await?;
            print!("{}", context.formatter.format_identity(&user)?);
        }

        UsersCommand::Me => {
            let me = context.client.users().me().await?;
            print!("{}", context.formatter.format_identity(&me)?);
        }

        UsersCommand::Update {
            email,
            first_name,
            last_name,
        } => {
            if let Some(ref email) = email {
                if !validate_email(email) {
                    return Err(CLIError::InputError(format!(
                        "'{}' is not a valid email address",
                        email
                    )));
                }
            }

            let update = ProfileUpdate {
                email,
                first_name,
                last_name,
            };
            if update.is_empty() {
                return Err(CLIError::InputError(
                    "Nothing to update. Pass at least one of --email, --first-name, --last-name."
                        .to_string(),
                ));
            }

            let me = context.client.users().update_me(&update).await?;
            // Keep the stored session in step with the server's copy.
            context.session.update_identity(me.clone())?;
            println!("Profile updated.");
            print!("{}", context.formatter.format_identity(&me)?);
        }
    }

    Ok(())
}
