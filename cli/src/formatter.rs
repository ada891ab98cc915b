//! Output formatting for teams, tasks, users, and dashboard stats.
//!
//! Table mode draws psql-style boxes sized to the terminal; JSON mode
//! prints the raw payload for scripting. Color is optional and never
//! applied inside table cells, where escape codes would break padding.

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use remotehub_link::{DashboardStats, Identity, Task, TaskPriority, TaskStatus, Team};

use crate::error::{CLIError, Result};
use crate::helpers::{format_date, format_relative_time};

/// Maximum column width before truncation
const MAX_COLUMN_WIDTH: usize = 32;

/// Minimum column width when resizing to fit the terminal
const MIN_COLUMN_WIDTH: usize = 6;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Formats command results for display
pub struct OutputFormatter {
    format: OutputFormat,
    color: bool,
}

impl OutputFormatter {
    /// Create a new formatter
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// True when output is JSON rather than human-oriented text
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Get terminal width, defaulting to 80 if unavailable
    fn get_terminal_width() -> usize {
        if let Some((w, _h)) = term_size::dimensions() {
            w
        } else {
            80
        }
    }

    /// Truncate a string to max width with ellipsis
    fn truncate_value(value: &str, max_width: usize) -> String {
        if value.len() <= max_width {
            value.to_string()
        } else if max_width <= 3 {
            value.chars().take(max_width).collect()
        } else {
            let take = max_width - 3;
            format!("{}...", value.chars().take(take).collect::<String>())
        }
    }

    /// Serialize any payload as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(|e| CLIError::FormatError(e.to_string()))
    }

    /// Format a team list
    pub fn format_teams(&self, teams: &[Team]) -> Result<String> {
        if matches!(self.format, OutputFormat::Json) {
            return self.format_json(teams);
        }
        if teams.is_empty() {
            return Ok("No teams found.".to_string());
        }

        let rows: Vec<Vec<String>> = teams
            .iter()
            .map(|team| {
                vec![
                    team.id.to_string(),
                    team.name.clone(),
                    opt_str(&team.description),
                    person(&team.manager),
                    team.members.len().to_string(),
                ]
            })
            .collect();
        let mut output =
            self.render_table(&["ID", "NAME", "DESCRIPTION", "MANAGER", "MEMBERS"], &rows);

        let label = if teams.len() == 1 { "team" } else { "teams" };
        output.push_str(&format!("({} {})", teams.len(), label));
        Ok(output)
    }

    /// Format one team with its members and tasks
    pub fn format_team(&self, team: &Team) -> Result<String> {
        if matches!(self.format, OutputFormat::Json) {
            return self.format_json(team);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "Team #{}: {}\n",
            team.id,
            self.emphasize(&team.name)
        ));
        if let Some(ref description) = team.description {
            output.push_str(&format!("Description: {}\n", description));
        }
        output.push_str(&format!("Manager: {}\n", person(&team.manager)));
        if let Some(ref created) = team.created_at {
            output.push_str(&format!("Created: {}\n", format_date(created)));
        }

        output.push_str(&format!("\nMembers ({}):\n", team.members.len()));
        if team.members.is_empty() {
            output.push_str("  (none)\n");
        } else {
            let rows: Vec<Vec<String>> = team
                .members
                .iter()
                .map(|member| {
                    vec![
                        member.id.map(|id| id.to_string()).unwrap_or_default(),
                        member.username.clone(),
                        member.display_name(),
                        member.role.label().to_string(),
                    ]
                })
                .collect();
            output.push_str(&self.render_table(&["ID", "USERNAME", "NAME", "ROLE"], &rows));
        }

        output.push_str(&format!("\nTasks ({}):\n", team.tasks.len()));
        if team.tasks.is_empty() {
            output.push_str("  (none)\n");
        } else {
            let rows: Vec<Vec<String>> = team
                .tasks
                .iter()
                .map(|task| {
                    vec![
                        task.id.to_string(),
                        task.title.clone(),
                        task.status.label().to_string(),
                        priority_cell(task.priority),
                        person(&task.assigned_to),
                    ]
                })
                .collect();
            output.push_str(
                &self.render_table(&["ID", "TITLE", "STATUS", "PRIORITY", "ASSIGNEE"], &rows),
            );
        }

        Ok(output)
    }

    /// Format a task list
    pub fn format_tasks(&self, tasks: &[Task]) -> Result<String> {
        if matches!(self.format, OutputFormat::Json) {
            return self.format_json(tasks);
        }
        if tasks.is_empty() {
            return Ok("No tasks found.".to_string());
        }

        let rows: Vec<Vec<String>> = tasks
            .iter()
            .map(|task| {
                vec![
                    task.id.to_string(),
                    task.title.clone(),
                    task.status.label().to_string(),
                    priority_cell(task.priority),
                    task.team
                        .as_ref()
                        .map(|team| team.name.clone())
                        .unwrap_or_else(|| "-".to_string()),
                    person(&task.assigned_to),
                    task.deadline
                        .as_deref()
                        .map(format_date)
                        .unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect();
        let mut output = self.render_table(
            &["ID", "TITLE", "STATUS", "PRIORITY", "TEAM", "ASSIGNEE", "DEADLINE"],
            &rows,
        );

        let label = if tasks.len() == 1 { "task" } else { "tasks" };
        output.push_str(&format!("({} {})", tasks.len(), label));
        Ok(output)
    }

    /// Format one task in detail
    pub fn format_task(&self, task: &Task) -> Result<String> {
        if matches!(self.format, OutputFormat::Json) {
            return self.format_json(task);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "Task #{}: {}\n",
            task.id,
            self.emphasize(&task.title)
        ));
        output.push_str(&format!("Status: {}\n", self.status_label(task.status)));
        if let Some(priority) = task.priority {
            output.push_str(&format!("Priority: {}\n", self.priority_label(priority)));
        }
        if let Some(ref team) = task.team {
            output.push_str(&format!("Team: {}\n", team.name));
        }
        output.push_str(&format!("Assigned to: {}\n", person(&task.assigned_to)));
        if let Some(ref deadline) = task.deadline {
            output.push_str(&format!("Deadline: {}\n", format_date(deadline)));
        }
        if let Some(ref certifier) = task.certified_by {
            output.push_str(&format!("Certified by: {}\n", certifier.display_name()));
        }
        if let Some(ref created) = task.created_at {
            output.push_str(&format!("Created: {}\n", format_relative_time(created)));
        }
        if let Some(ref updated) = task.updated_at {
            output.push_str(&format!("Updated: {}\n", format_relative_time(updated)));
        }
        if let Some(ref description) = task.description {
            output.push_str(&format!("\n{}\n", description));
        }

        Ok(output)
    }

    /// Format a user list
    pub fn format_users(&self, users: &[Identity]) -> Result<String> {
        if matches!(self.format, OutputFormat::Json) {
            return self.format_json(users);
        }
        if users.is_empty() {
            return Ok("No users found.".to_string());
        }

        let rows: Vec<Vec<String>> = users
            .iter()
            .map(|user| {
                vec![
                    user.id.map(|id| id.to_string()).unwrap_or_default(),
                    user.username.clone(),
                    user.display_name(),
                    opt_str(&user.email),
                    user.role.label().to_string(),
                    if user.is_active { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();
        let mut output = self.render_table(
            &["ID", "USERNAME", "NAME", "EMAIL", "ROLE", "ACTIVE"],
            &rows,
        );

        let label = if users.len() == 1 { "user" } else { "users" };
        output.push_str(&format!("({} {})", users.len(), label));
        Ok(output)
    }

    /// Format one user's profile
    pub fn format_identity(&self, user: &Identity) -> Result<String> {
        if matches!(self.format, OutputFormat::Json) {
            return self.format_json(user);
        }

        let mut output = String::new();
        output.push_str(&format!("Username: {}\n", self.emphasize(&user.username)));
        output.push_str(&format!("Name: {}\n", user.display_name()));
        output.push_str(&format!("Email: {}\n", opt_str(&user.email)));
        output.push_str(&format!("Role: {}\n", user.role.label()));
        output.push_str(&format!(
            "Active: {}\n",
            if user.is_active { "yes" } else { "no" }
        ));
        Ok(output)
    }

    /// Format dashboard statistics
    pub fn format_stats(&self, stats: &DashboardStats) -> Result<String> {
        if matches!(self.format, OutputFormat::Json) {
            return self.format_json(stats);
        }

        Ok(format!(
            "Active teams:    {}\nPending tasks:   {}\nCompleted today: {}\nTotal members:   {}",
            self.emphasize(&stats.active_teams.to_string()),
            self.emphasize(&stats.pending_tasks.to_string()),
            self.emphasize(&stats.completed_today.to_string()),
            self.emphasize(&stats.total_members.to_string()),
        ))
    }

    /// Bold a value when color is enabled
    fn emphasize(&self, value: &str) -> String {
        if self.color {
            value.bold().to_string()
        } else {
            value.to_string()
        }
    }

    fn status_label(&self, status: TaskStatus) -> String {
        let label = status.label();
        if !self.color {
            return label.to_string();
        }
        match status {
            TaskStatus::Todo => label.yellow().to_string(),
            TaskStatus::InProgress => label.cyan().to_string(),
            TaskStatus::Done => label.green().to_string(),
            TaskStatus::Certified => label.bright_green().to_string(),
        }
    }

    fn priority_label(&self, priority: TaskPriority) -> String {
        let label = priority.label();
        if !self.color {
            return label.to_string();
        }
        match priority {
            TaskPriority::Low => label.green().to_string(),
            TaskPriority::Medium => label.yellow().to_string(),
            TaskPriority::High => label.red().to_string(),
        }
    }

    /// Draw a box table sized to the terminal.
    ///
    /// Every row must have exactly one cell per column.
    fn render_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let terminal_width = Self::get_terminal_width();

        let mut col_widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
        for row in rows {
            for (i, value) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(value.len());
            }
        }

        let column_count = col_widths.len();
        if column_count > 0 {
            // Account for "│ " and " " around each cell plus the final "│"
            let border_padding = column_count * 3 + 1;
            let mut available = terminal_width.saturating_sub(border_padding);
            if available < column_count {
                available = column_count;
            }

            // Only truncate if total width exceeds available space
            let mut total_width = col_widths.iter().sum::<usize>();
            if total_width > available {
                for width in col_widths.iter_mut() {
                    if *width > MAX_COLUMN_WIDTH {
                        *width = MAX_COLUMN_WIDTH;
                    }
                }
                total_width = col_widths.iter().sum();

                // Shrink the widest column until everything fits
                while total_width > available {
                    if let Some((idx, _)) = col_widths
                        .iter()
                        .enumerate()
                        .filter(|(_, width)| **width > MIN_COLUMN_WIDTH)
                        .max_by_key(|(_, width)| *width)
                    {
                        col_widths[idx] -= 1;
                    } else if let Some((idx, _)) = col_widths
                        .iter()
                        .enumerate()
                        .filter(|(_, width)| **width > 1)
                        .max_by_key(|(_, width)| *width)
                    {
                        col_widths[idx] -= 1;
                    } else {
                        break;
                    }
                    total_width = col_widths.iter().sum();
                }
            }
        }

        let mut output = String::new();

        // Top border
        output.push('┌');
        for (idx, width) in col_widths.iter().enumerate() {
            output.push_str(&"─".repeat(width + 2));
            output.push(if idx == col_widths.len() - 1 {
                '┐'
            } else {
                '┬'
            });
        }
        output.push('\n');

        // Header row (colored after padding, so widths stay correct)
        output.push('│');
        for (i, col) in columns.iter().enumerate() {
            output.push(' ');
            let truncated = Self::truncate_value(col, col_widths[i]);
            let padded = format!("{:width$}", truncated, width = col_widths[i]);
            output.push_str(&self.emphasize(&padded));
            output.push(' ');
            output.push('│');
        }
        output.push('\n');

        // Header separator
        output.push('├');
        for (idx, width) in col_widths.iter().enumerate() {
            output.push_str(&"─".repeat(width + 2));
            output.push(if idx == col_widths.len() - 1 {
                '┤'
            } else {
                '┼'
            });
        }
        output.push('\n');

        // Data rows
        for row in rows {
            output.push('│');
            for (i, value) in row.iter().enumerate() {
                output.push(' ');
                let truncated = Self::truncate_value(value, col_widths[i]);
                output.push_str(&format!("{:width$}", truncated, width = col_widths[i]));
                output.push(' ');
                output.push('│');
            }
            output.push('\n');
        }

        // Bottom border
        output.push('└');
        for (idx, width) in col_widths.iter().enumerate() {
            output.push_str(&"─".repeat(width + 2));
            output.push(if idx == col_widths.len() - 1 {
                '┘'
            } else {
                '┴'
            });
        }
        output.push('\n');

        output
    }
}

fn opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn person(identity: &Option<Identity>) -> String {
    identity
        .as_ref()
        .map(|identity| identity.display_name())
        .unwrap_or_else(|| "-".to_string())
}

fn priority_cell(priority: Option<TaskPriority>) -> String {
    priority
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| "-".to_string())
}
