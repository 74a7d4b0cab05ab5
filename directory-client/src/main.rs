//! `directory` - terminal front-end for the employee directory

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use directory_client::controller::{FormField, Notice, NoticeLevel, Ui};
use directory_client::{ClientConfig, Controller, EmployeeProxy, NetworkHttpClient, ViewState};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "directory")]
#[command(about = "Manage employee records on a directory server")]
struct Cli {
    /// Server root URL
    #[arg(long, env = "DIRECTORY_API_URL", default_value = directory_client::config::DEFAULT_BASE_URL)]
    url: String,
    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all employees
    List,
    /// Show one employee
    Show { id: String },
    /// Create an employee
    Add(AddArgs),
    /// Change some fields of an employee
    Edit {
        id: String,
        #[command(flatten)]
        fields: EditArgs,
    },
    /// Delete an employee
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    position: String,
    #[arg(long)]
    office: String,
    #[arg(long)]
    salary: f64,
}

#[derive(Args)]
struct EditArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    position: Option<String>,
    #[arg(long)]
    office: Option<String>,
    #[arg(long)]
    salary: Option<f64>,
}

impl EditArgs {
    fn into_fields(self) -> Vec<FormField> {
        let mut fields = Vec::new();
        if let Some(v) = self.name {
            fields.push(FormField::Name(v));
        }
        if let Some(v) = self.position {
            fields.push(FormField::Position(v));
        }
        if let Some(v) = self.office {
            fields.push(FormField::Office(v));
        }
        if let Some(v) = self.salary {
            fields.push(FormField::Salary(v));
        }
        fields
    }
}

/// Notices on stdout/stderr, confirmation on stdin
struct TerminalUi {
    assume_yes: bool,
    failed: bool,
}

impl TerminalUi {
    fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            failed: false,
        }
    }
}

impl Ui for TerminalUi {
    fn notify(&mut self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.message),
            NoticeLevel::Failure => {
                self.failed = true;
                eprintln!("error: {}", notice.message);
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

fn print_table(state: &ViewState) {
    println!(
        "{:<34} {:<20} {:<20} {:<16} {:>12}",
        "ID", "NAME", "POSITION", "OFFICE", "SALARY"
    );
    for e in state.employees() {
        println!(
            "{:<34} {:<20} {:<20} {:<16} {:>12.2}",
            e.id, e.name, e.position, e.office, e.salary
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::new(cli.url);
    if let Some(seconds) = cli.timeout {
        config = config.with_timeout(seconds);
    }
    let http = NetworkHttpClient::new(&config)?;
    let proxy = EmployeeProxy::new(http);

    let assume_yes = matches!(cli.command, Command::Delete { yes: true, .. });
    let mut controller = Controller::new(proxy, TerminalUi::new(assume_yes));

    match cli.command {
        Command::List => {
            controller.load().await;
            if !controller.ui().failed {
                print_table(controller.state());
            }
        }
        Command::Show { id } => match controller.proxy().fetch_one(&id).await {
            Ok(employee) => println!("{}", serde_json::to_string_pretty(&employee)?),
            Err(e) => {
                eprintln!("error: {e}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Add(args) => {
            controller.reset();
            for field in [
                FormField::Name(args.name),
                FormField::Position(args.position),
                FormField::Office(args.office),
                FormField::Salary(args.salary),
            ] {
                controller.edit(field);
            }
            controller.submit().await;
        }
        Command::Edit { id, fields } => {
            controller.load().await;
            if controller.ui().failed {
                return Ok(ExitCode::FAILURE);
            }
            if !controller.select(&id) {
                eprintln!("error: no employee with id {id}");
                return Ok(ExitCode::FAILURE);
            }
            for field in fields.into_fields() {
                controller.edit(field);
            }
            controller.submit().await;
        }
        Command::Delete { id, .. } => {
            controller.delete(id).await;
        }
    }

    if controller.into_ui().failed {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
