//! intake-cli: headless driver for the complaint intake core.
//!
//! Usage:
//!   intake-cli submit --name "Ada Li" --email ada@example.com \
//!       --category Service --priority High --description "..." \
//!       [--anonymous] [--file photo.png]
//!   intake-cli track --id CMP-1700000000000-42 [--json]
//!   intake-cli list [--status "In Progress"] [--priority High] [--category Service] [--json]
//!   intake-cli stats
//!   intake-cli set-status --id CMP-... --status Resolved
//!   intake-cli reply --id CMP-... --text "We are on it."
//!
//! Global flags: --db intake.db  --config config.json  --blob-dir ./blobs
//!
//! Local adapters only: attachments land on the filesystem and alerts go to
//! the log. Production deployments supply real BlobStore/Mailer backends.

use anyhow::{bail, Context, Result};
use intake_core::{
    attachment::{Attachment, BlobStore},
    config::IntakeConfig,
    error::{IntakeError, IntakeResult},
    factory::RawSubmission,
    notify::{AlertParams, Mailer, NotificationOutcome},
    query::{self, ComplaintFilter},
    record::ComplaintRecord,
    service::IntakeService,
    store::IntakeStore,
    types::{Priority, Status},
};
use std::env;
use std::fs;
use std::path::PathBuf;

// ── Local adapters ──────────────────────────────────────────────────

/// Blob store backed by a local directory. Returns a file:// URL.
struct FsBlobStore {
    root: PathBuf,
}

impl BlobStore for FsBlobStore {
    fn upload(&self, attachment: &Attachment, path: &str) -> IntakeResult<String> {
        let target = self.root.join(path);
        let write = || -> std::io::Result<PathBuf> {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, &attachment.bytes)?;
            target.canonicalize()
        };
        let stored = write().map_err(|e| IntakeError::Upload {
            reason: format!("cannot write {}: {e}", target.display()),
        })?;
        Ok(format!("file://{}", stored.display()))
    }
}

/// Mailer that logs the alert instead of delivering it.
struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, params: &AlertParams) -> IntakeResult<()> {
        log::info!(
            "ALERT to {}: complaint {} ({}, {}) from {} <{}>",
            params.to_email,
            params.complaint_id,
            params.category,
            params.priority,
            params.user_name,
            params.user_email,
        );
        Ok(())
    }
}

// ── Entry point ─────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(command) = args.get(1).cloned() else {
        print_usage();
        return Ok(());
    };

    let db = flag_value(&args, "--db").unwrap_or("intake.db");
    let config = match flag_value(&args, "--config") {
        Some(path) => IntakeConfig::load(path)?,
        None => IntakeConfig::builtin(),
    };
    let blob_dir = PathBuf::from(flag_value(&args, "--blob-dir").unwrap_or("./blobs"));

    let store = IntakeStore::open(db)?;
    store.migrate()?;

    let mut service = IntakeService::new(config, store, FsBlobStore { root: blob_dir }, LogMailer);

    match command.as_str() {
        "submit" => cmd_submit(&args, &mut service),
        "track" => cmd_track(&args, &service),
        "list" => cmd_list(&args, &service),
        "stats" => cmd_stats(&service),
        "set-status" => cmd_set_status(&args, &service),
        "reply" => cmd_reply(&args, &service),
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }
}

type CliService = IntakeService<IntakeStore, FsBlobStore, LogMailer>;

fn cmd_submit(args: &[String], service: &mut CliService) -> Result<()> {
    let raw = RawSubmission {
        user_name: required_flag(args, "--name")?.to_string(),
        user_email: required_flag(args, "--email")?.to_string(),
        category: required_flag(args, "--category")?.to_string(),
        priority: required_flag(args, "--priority")?.to_string(),
        description: required_flag(args, "--description")?.to_string(),
        is_anonymous: args.iter().any(|a| a == "--anonymous"),
    };

    let attachment = match flag_value(args, "--file") {
        Some(path) => Some(read_attachment(path)?),
        None => None,
    };

    let receipt = service.submit(&raw, attachment.as_ref())?;
    println!("Complaint submitted: {}", receipt.complaint_id);
    match &receipt.notification {
        NotificationOutcome::Sent => println!("High-priority alert sent."),
        NotificationOutcome::Failed(reason) => {
            println!("High-priority alert failed ({reason}); complaint is saved.")
        }
        NotificationOutcome::NotRequired => {}
    }
    Ok(())
}

fn cmd_track(args: &[String], service: &CliService) -> Result<()> {
    let id = required_flag(args, "--id")?;
    match service.track(id)? {
        Some(record) if wants_json(args) => {
            println!("{}", serde_json::to_string_pretty(&record)?)
        }
        Some(record) => print_record(&record),
        None => println!("Complaint not found. Please check the ID and try again."),
    }
    Ok(())
}

fn cmd_list(args: &[String], service: &CliService) -> Result<()> {
    let criteria = ComplaintFilter {
        priority: parse_flag(args, "--priority", Priority::parse, "priority")?,
        status: parse_flag(args, "--status", Status::parse, "status")?,
        category: flag_value(args, "--category").map(str::to_string),
    };

    let snapshot = service.dashboard()?;
    let rows = query::filter(&snapshot, &criteria);
    if rows.is_empty() {
        println!("No complaints found");
        return Ok(());
    }
    if wants_json(args) {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<28} {:<20} {:<14} {:<8} {:<12} {}",
        "ID", "NAME", "CATEGORY", "PRIORITY", "STATUS", "CREATED"
    );
    for r in &rows {
        println!(
            "{:<28} {:<20} {:<14} {:<8} {:<12} {}",
            r.complaint_id,
            r.user_name,
            r.category,
            r.priority,
            r.status,
            r.created_at.format("%b %e, %Y %H:%M"),
        );
    }
    Ok(())
}

fn cmd_stats(service: &CliService) -> Result<()> {
    let snapshot = service.dashboard()?;
    let counts = query::count_by_status(&snapshot);
    let badge = query::count_high_priority_unresolved(&snapshot);

    println!("Total:         {}", counts.total);
    println!("Pending:       {}", counts.pending);
    println!("In Progress:   {}", counts.in_progress);
    println!("Resolved:      {}", counts.resolved);
    println!("High priority: {badge} unresolved");
    Ok(())
}

fn cmd_set_status(args: &[String], service: &CliService) -> Result<()> {
    let id = required_flag(args, "--id")?;
    let status = required_flag(args, "--status")?;
    service.update_status(id, status)?;
    println!("Status updated: {id} -> {status}");
    Ok(())
}

fn cmd_reply(args: &[String], service: &CliService) -> Result<()> {
    let id = required_flag(args, "--id")?;
    let text = required_flag(args, "--text")?;
    service.reply(id, text)?;
    println!("Reply recorded for {id}");
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn required_flag<'a>(args: &'a [String], flag: &str) -> Result<&'a str> {
    flag_value(args, flag).with_context(|| format!("missing required flag {flag}"))
}

fn parse_flag<T>(
    args: &[String],
    flag: &str,
    parse: fn(&str) -> Option<T>,
    what: &str,
) -> Result<Option<T>> {
    match flag_value(args, flag) {
        None => Ok(None),
        Some(raw) => match parse(raw) {
            Some(value) => Ok(Some(value)),
            None => bail!("invalid {what}: {raw}"),
        },
    }
}

fn wants_json(args: &[String]) -> bool {
    args.iter().any(|a| a == "--json")
}

fn read_attachment(path: &str) -> Result<Attachment> {
    let bytes = fs::read(path).with_context(|| format!("cannot read attachment {path}"))?;
    let file_name = PathBuf::from(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_string());
    Ok(Attachment {
        content_type: content_type_for(&file_name).to_string(),
        file_name,
        bytes,
    })
}

fn content_type_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next().map(str::to_ascii_lowercase) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "gif" => "image/gif",
        Some(ext) if ext == "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

fn print_record(record: &ComplaintRecord) {
    println!("Complaint {}", record.complaint_id);
    println!("  Submitted:  {}", record.created_at.format("%B %e, %Y %H:%M"));
    println!("  Updated:    {}", record.updated_at.format("%B %e, %Y %H:%M"));
    println!("  Name:       {}", record.user_name);
    println!("  Category:   {}", record.category);
    println!("  Priority:   {}", record.priority);
    println!("  Status:     {}", record.status);
    println!("  Description:{}", indent(&record.description));
    if let Some(url) = &record.file_url {
        println!("  Attachment: {url}");
    }
    if record.admin_reply.is_empty() {
        println!("  Admin reply: (none yet)");
    } else {
        println!("  Admin reply:{}", indent(&record.admin_reply));
    }
}

fn indent(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        out.push_str("\n    ");
        out.push_str(line);
    }
    out
}

fn print_usage() {
    println!("intake-cli — complaint intake over SQLite");
    println!();
    println!("Commands:");
    println!("  submit      --name --email --category --priority --description [--anonymous] [--file]");
    println!("  track       --id [--json]");
    println!("  list        [--status] [--priority] [--category] [--json]");
    println!("  stats");
    println!("  set-status  --id --status");
    println!("  reply       --id --text");
    println!();
    println!("Global: --db PATH (default intake.db), --config PATH, --blob-dir PATH");
}
