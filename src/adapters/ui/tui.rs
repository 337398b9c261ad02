//! Implements InputPort. Inquire-based interactive dashboard.
//!
//! Menu: processes, new process, document search, notifications, expiry scan.
//! Esc / Ctrl-C inside a sub-prompt returns to the menu; at the menu it quits.

use crate::domain::{DomainError, ExpiryStatus, ProcessRecordInput, ProcessType};
use crate::ports::InputPort;
use crate::usecases::{AlertService, NotificationService, ProcessService, SearchService};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::io::stdout;
use std::sync::Arc;

use super::progress::spinner;

/// Dates are shown day-first, as entered by users.
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Applies the prompt theme globally.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(PromptColor::LightGreen))
        .with_highlighted_option_prefix(Styled::new("▸").with_fg(PromptColor::LightGreen));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Processes,
    NewProcess,
    SearchDocuments,
    Notifications,
    ScanExpiry,
    Quit,
}

const MENU: [MenuItem; 6] = [
    MenuItem::Processes,
    MenuItem::NewProcess,
    MenuItem::SearchDocuments,
    MenuItem::Notifications,
    MenuItem::ScanExpiry,
    MenuItem::Quit,
];

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::Processes => "Processes",
            MenuItem::NewProcess => "New process",
            MenuItem::SearchDocuments => "Search documents",
            MenuItem::Notifications => "Notifications",
            MenuItem::ScanExpiry => "Scan for expiring licenses",
            MenuItem::Quit => "Quit",
        };
        f.write_str(label)
    }
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Cancel -> `None`; any other prompt failure is a UI error.
fn answer<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if is_cancel(&e) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn status_color(status: ExpiryStatus) -> Color {
    match status {
        ExpiryStatus::Expired => Color::Red,
        ExpiryStatus::ExpiringSoon => Color::DarkYellow,
        ExpiryStatus::Active => Color::Green,
        ExpiryStatus::NoExpiry => Color::Grey,
    }
}

fn print_colored(text: &str, color: Color) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(text));
    let _ = out.execute(Print("\r\n"));
    let _ = out.execute(ResetColor);
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// TUI adapter. Inquire prompts over the application services.
pub struct TuiInputPort {
    processes: Arc<ProcessService>,
    search: Arc<SearchService>,
    notifications: Arc<NotificationService>,
    alerts: Arc<AlertService>,
}

impl TuiInputPort {
    pub fn new(
        processes: Arc<ProcessService>,
        search: Arc<SearchService>,
        notifications: Arc<NotificationService>,
        alerts: Arc<AlertService>,
    ) -> Self {
        Self {
            processes,
            search,
            notifications,
            alerts,
        }
    }

    async fn show_processes(&self) -> Result<(), DomainError> {
        let overview = self.processes.overview(Utc::now()).await?;
        if overview.is_empty() {
            println!("No processes yet. Add your first process.");
            return Ok(());
        }
        for item in &overview {
            let r = &item.record;
            let expiry = format_date(r.license_expiry_date);
            print_colored(
                &format!(
                    "{:<14} {:<22} {:<14} expires {:<10} [{}]",
                    r.process_number,
                    r.process_type.label(),
                    r.protocol_date.format(DISPLAY_DATE_FORMAT).to_string(),
                    expiry,
                    item.status
                ),
                status_color(item.status),
            );
            println!("    {} | {} | {}", r.client_name, r.location, r.description);
            if let Some(obs) = &r.observations {
                println!("    note: {}", obs);
            }
        }
        let attention = overview.iter().filter(|o| o.status.needs_attention()).count();
        println!(
            "{} process(es), {} need attention (warning window {} days)",
            overview.len(),
            attention,
            self.processes.classifier().warning_days()
        );
        Ok(())
    }

    async fn new_process(&self) -> Result<(), DomainError> {
        let Some(process_number) = answer(
            Text::new("Process number:")
                .with_placeholder("LP-2024-001")
                .prompt(),
        )?
        else {
            return Ok(());
        };
        let Some(protocol_date) = answer(
            Text::new("Protocol date:")
                .with_help_message("YYYY-MM-DD or DD/MM/YYYY")
                .prompt(),
        )?
        else {
            return Ok(());
        };
        let Some(process_type) =
            answer(Select::new("Process type:", ProcessType::ALL.to_vec()).prompt())?
        else {
            return Ok(());
        };
        let Some(description) = answer(
            Text::new("Description:")
                .with_help_message("at least 10 characters")
                .prompt(),
        )?
        else {
            return Ok(());
        };
        let Some(client_name) = answer(Text::new("Client name:").prompt())? else {
            return Ok(());
        };
        let Some(location) = answer(
            Text::new("Location:")
                .with_placeholder("São Paulo, SP")
                .prompt(),
        )?
        else {
            return Ok(());
        };
        let Some(license_expiry_date) = answer(
            Text::new("License expiry date:")
                .with_help_message("optional; leave empty if none")
                .prompt(),
        )?
        else {
            return Ok(());
        };
        let Some(observations) = answer(Text::new("Observations:").prompt())? else {
            return Ok(());
        };

        let input = ProcessRecordInput {
            process_number,
            protocol_date,
            process_type: process_type.code().to_string(),
            description,
            client_name,
            location,
            license_expiry_date: Some(license_expiry_date),
            observations: Some(observations),
        };
        let record = self.processes.create(&input).await?;
        print_colored(
            &format!("Process {} created.", record.process_number),
            Color::Green,
        );
        Ok(())
    }

    async fn search_documents(&self) -> Result<(), DomainError> {
        let Some(query) = answer(
            Text::new("Search documents:")
                .with_placeholder("e.g. CONAMA, impacto")
                .prompt(),
        )?
        else {
            return Ok(());
        };

        let pb = spinner("Searching...");
        let result = self.search.search(&query).await;
        pb.finish_and_clear();
        let results = result?;

        if results.is_empty() {
            println!("No documents found for \"{}\".", query.trim());
            return Ok(());
        }
        let noun = if results.len() == 1 { "result" } else { "results" };
        println!("{} {}", results.len(), noun);
        for doc in &results {
            println!(
                "  {} [{}] {} (rank {:.2})",
                doc.file_name, doc.process_number, doc.file_type, doc.rank
            );
            println!("    {}", doc.excerpt);
        }

        let mut options: Vec<String> = results
            .iter()
            .map(|d| format!("Download {}", d.file_name))
            .collect();
        options.push("Back".to_string());
        let Some(choice) = answer(Select::new("Action:", options).raw_prompt())? else {
            return Ok(());
        };
        let Some(doc) = results.get(choice.index) else {
            return Ok(());
        };

        let pb = spinner(format!("Downloading {}...", doc.file_name));
        let bytes = self.search.download(&doc.id).await;
        pb.finish_and_clear();
        let bytes = bytes?;
        print_colored(
            &format!("Downloaded {} ({} bytes).", doc.file_name, bytes.len()),
            Color::Green,
        );
        Ok(())
    }

    async fn show_notifications(&self) -> Result<(), DomainError> {
        let notes = self.notifications.list().await?;
        if notes.is_empty() {
            println!("No pending notifications.");
            return Ok(());
        }
        let unread = self.notifications.unread_count().await?;
        println!("{} notification(s), {} unread", notes.len(), unread);

        let mut options: Vec<String> = notes
            .iter()
            .map(|n| {
                let marker = if n.is_read { " " } else { "●" };
                format!(
                    "{} {} [{}] {} ({})",
                    marker,
                    n.title,
                    n.related_process_number,
                    n.message,
                    n.created_at.format("%d/%m/%Y %H:%M")
                )
            })
            .collect();
        let mark_all = unread > 0;
        if mark_all {
            options.push("Mark all as read".to_string());
        }
        options.push("Back".to_string());

        let Some(choice) = answer(
            Select::new("Select to mark as read:", options)
                .with_page_size(10)
                .raw_prompt(),
        )?
        else {
            return Ok(());
        };

        if let Some(note) = notes.get(choice.index) {
            self.notifications.mark_read(&note.id).await?;
        } else if mark_all && choice.index == notes.len() {
            self.notifications.mark_all_read().await?;
        }
        Ok(())
    }

    async fn scan_expiry(&self) -> Result<(), DomainError> {
        let created = self.alerts.scan(Utc::now()).await?;
        if created.is_empty() {
            println!("No new expiry alerts.");
        }
        for n in &created {
            print_colored(&format!("{}: {}", n.title, n.message), Color::DarkYellow);
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let unread = self.notifications.unread_count().await?;
            let title = if unread > 0 {
                format!("Dashboard ({} unread)", unread)
            } else {
                "Dashboard".to_string()
            };
            let Some(item) = answer(Select::new(&title, MENU.to_vec()).prompt())? else {
                return Ok(());
            };

            let result = match item {
                MenuItem::Processes => self.show_processes().await,
                MenuItem::NewProcess => self.new_process().await,
                MenuItem::SearchDocuments => self.search_documents().await,
                MenuItem::Notifications => self.show_notifications().await,
                MenuItem::ScanExpiry => self.scan_expiry().await,
                MenuItem::Quit => return Ok(()),
            };

            match result {
                Ok(()) => {}
                Err(e @ DomainError::Ui(_)) => return Err(e),
                Err(e) => print_colored(&e.to_string(), Color::Red),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_maps_cancel_to_none() {
        let cancelled: Result<String, InquireError> = Err(InquireError::OperationCanceled);
        assert_eq!(answer(cancelled).unwrap(), None);

        let ok: Result<u8, InquireError> = Ok(3);
        assert_eq!(answer(ok).unwrap(), Some(3));

        let failed: Result<u8, InquireError> =
            Err(InquireError::InvalidConfiguration("bad".to_string()));
        assert!(matches!(answer(failed), Err(DomainError::Ui(_))));
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(ExpiryStatus::Expired), Color::Red);
        assert_eq!(status_color(ExpiryStatus::ExpiringSoon), Color::DarkYellow);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 12, 15)), "15/12/2024");
        assert_eq!(format_date(None), "-");
    }
}
