//! Dashboard summary command.

use remotehub_cli::error::Result;

use crate::connect::AppContext;

/// Show the dashboard counters plus the most recent tasks.
pub async fn show(context: &AppContext) -> Result<()> {
    context.require(None)?;

    let stats = context.client.dashboard_stats().await?;
    let recent = context.client.tasks().list(Some(5)).await?;

    if context.formatter.is_json() {
        let combined = serde_json::json!({
            "stats": stats,
            "recentTasks": recent,
        });
        println!("{}", context.formatter.format_json(&combined)?);
    } else {
        println!("{}", context.formatter.format_stats(&stats)?);
        println!();
        println!("Recent tasks:");
        println!("{}", context.formatter.format_tasks(&recent)?);
    }

    Ok(())
}
