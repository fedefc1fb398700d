//! CLI argument definitions and command dispatch.
//!
//! Commands write their report to the given writer and return a
//! [`CommandStatus`], so the binary only maps it to a process exit code.

use std::io::Write;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use domain::{
    validate_email, RegistrationForm, StrengthReport, MIN_PASSWORD_LENGTH, STRENGTH_CRITERIA_COUNT,
};

use crate::config::RegistrationServiceConfig;
use crate::service::RegistrationService;
use crate::{build_orchestrator, IdentityBackend};

/// Account registration against an identity provider
#[derive(Parser, Debug)]
#[command(name = "registration-service")]
#[command(about = "Account registration against an identity provider")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a registration form
    Register(RegisterArgs),

    /// Show the strength tier of a password
    Strength { password: String },

    /// Check whether an email address is well-formed
    CheckEmail { email: String },
}

/// Arguments for the register command
#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "", env = "REGISTRATION_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long, default_value = "", env = "REGISTRATION_CONFIRM_PASSWORD", hide_env_values = true)]
    pub confirm_password: String,
    /// Accept the terms of use and privacy policy
    #[arg(long)]
    pub accept_terms: bool,
    /// Use an in-process identity provider instead of IDENTITY_SERVICE_URL
    #[arg(long)]
    pub in_memory: bool,
    /// Emails already registered in the in-process provider
    #[arg(long = "existing", requires = "in_memory")]
    pub existing: Vec<String>,
}

impl RegisterArgs {
    fn backend(&self) -> IdentityBackend {
        if self.in_memory {
            IdentityBackend::InMemory {
                existing: self.existing.clone(),
            }
        } else {
            IdentityBackend::Http
        }
    }

    fn into_form(self) -> RegistrationForm {
        RegistrationForm::new(self.name, self.email, self.password, self.confirm_password)
            .with_terms_accepted(self.accept_terms)
    }
}

/// Outcome of one command, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Success => ExitCode::SUCCESS,
            CommandStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// Run a parsed command, writing its report to `out`.
pub async fn run(
    cli: Cli,
    config: &RegistrationServiceConfig,
    out: &mut dyn Write,
) -> Result<CommandStatus, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Register(args) => {
            let orchestrator = build_orchestrator(config, args.backend())?;
            let result = orchestrator.submit(&args.into_form()).await;
            writeln!(out, "{}", result.user_message())?;

            if result.is_success() {
                Ok(CommandStatus::Success)
            } else {
                Ok(CommandStatus::Failure)
            }
        }
        Commands::Strength { password } => {
            let report = StrengthReport::evaluate(&password);
            writeln!(
                out,
                "strength: {} ({}/{})",
                report.strength(),
                report.score(),
                STRENGTH_CRITERIA_COUNT
            )?;
            writeln!(out, "  length >= {}: {}", MIN_PASSWORD_LENGTH, report.long_enough)?;
            writeln!(out, "  uppercase:   {}", report.has_uppercase)?;
            writeln!(out, "  lowercase:   {}", report.has_lowercase)?;
            writeln!(out, "  digit:       {}", report.has_digit)?;
            writeln!(out, "  symbol:      {}", report.has_symbol)?;

            Ok(CommandStatus::Success)
        }
        Commands::CheckEmail { email } => {
            if validate_email(&email) {
                writeln!(out, "valid")?;
                Ok(CommandStatus::Success)
            } else {
                writeln!(out, "invalid")?;
                Ok(CommandStatus::Failure)
            }
        }
    }
}
