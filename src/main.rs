use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::{fs, path::PathBuf, sync::Arc};

use gostudent_checkout::{
    RegistrationForm, RegistrationService, SubmissionFlow, SubmitBlock, SubmitOutcome,
    config::{http::build_http_client, settings::AppConfig},
    constants::{DEFAULT_DURATION_MONTHS, DURATION_OPTIONS},
    repositories::registration_api::RegistrationApi,
    services::pricing_service::compute_pricing,
    types::models::registration::{
        country::Country, monthly_sessions::MonthlySessions, payment_method::PaymentMethod,
    },
    utils::{
        format_utils::render_order_overview, locale_utils::Lang,
        validation_utils::collect_field_errors,
    },
};
use strum::IntoEnumIterator;

/// Price, validate and submit tutoring registrations
#[derive(Parser, Debug)]
#[command(name = "gostudent-checkout")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Message language (en, de); defaults to APP_LANG
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Contract duration in months (6, 9, 12, 18, 24 or 36)
    #[arg(long, default_value_t = DEFAULT_DURATION_MONTHS)]
    duration: u32,

    /// Pay in advance for an extra 5% off the total
    #[arg(long)]
    pay_in_advance: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the selectable durations, session counts, countries and payment methods
    Options,

    /// Print the order overview for a plan
    Quote {
        #[command(flatten)]
        plan: PlanArgs,

        /// Monthly sessions shown in the overview
        #[arg(long, default_value = "")]
        sessions: String,
    },

    /// Validate a registration form stored as JSON
    Validate {
        #[arg(long)]
        form: PathBuf,
    },

    /// Validate and submit a registration form stored as JSON
    Submit {
        #[arg(long)]
        form: PathBuf,

        #[command(flatten)]
        plan: PlanArgs,

        /// Accept the terms and conditions
        #[arg(long)]
        accept_terms: bool,

        /// Base URL of the registration API; defaults to REGISTRATION_API_URL
        #[arg(long)]
        api_url: Option<String>,
    },
}

fn read_form(path: &PathBuf) -> Result<RegistrationForm> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read form {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid form JSON in {:?}", path))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let mut config = AppConfig::from_env();

    let cli = Cli::parse();
    if let Some(code) = cli.lang.as_deref() {
        config = config.with_lang(Lang::from_code(code));
    }

    match cli.command {
        Command::Options => {
            let durations: Vec<String> = DURATION_OPTIONS
                .iter()
                .map(|months| format!("{} MONTHS", months))
                .collect();
            println!("{:<18}{}", "Durations:", durations.join(", "));

            let sessions: Vec<String> = MonthlySessions::iter().map(|s| s.label()).collect();
            println!("{:<18}{}", "Monthly sessions:", sessions.join(", "));

            let countries: Vec<String> = Country::iter()
                .map(|country| format!("{} ({})", country.label(), country))
                .collect();
            println!("{:<18}{}", "Countries:", countries.join(", "));

            let methods: Vec<String> = PaymentMethod::iter().map(|m| m.to_string()).collect();
            println!("{:<18}{}", "Payment methods:", methods.join(", "));
        }

        Command::Quote { plan, sessions } => {
            if !sessions.is_empty()
                && sessions
                    .parse::<u32>()
                    .ok()
                    .and_then(MonthlySessions::from_count)
                    .is_none()
            {
                bail!("{} monthly sessions is not offered", sessions);
            }
            let quote = compute_pricing(plan.duration, plan.pay_in_advance);
            for (label, value) in render_order_overview(&quote, &sessions) {
                println!("{:<26}{:>12}", label, value);
            }
        }

        Command::Validate { form } => {
            let form = read_form(&form)?;
            let errors = collect_field_errors(&form, &config.messages());
            println!("{}", serde_json::to_string_pretty(&errors)?);
            if !errors.is_empty() {
                bail!("{} invalid field(s)", errors.len());
            }
        }

        Command::Submit {
            form,
            plan,
            accept_terms,
            api_url,
        } => {
            if let Some(url) = api_url {
                config = config.with_api_base_url(url);
            }
            let form = read_form(&form)?;

            let api = RegistrationApi::new(build_http_client()?, config.submission_url());
            let service = RegistrationService::new(Arc::new(api), Arc::new(config.messages()));

            let mut flow = SubmissionFlow::new(Arc::new(service)).with_form(form);
            flow.select_duration(plan.duration)?;
            flow.set_pay_in_advance(plan.pay_in_advance);
            flow.set_accepted_terms(accept_terms);

            info!("Submitting to {}", config.submission_url());
            match flow.submit().await {
                SubmitOutcome::Completed(result) => {
                    println!("{}", result.message.unwrap_or_default());
                    if !result.success {
                        bail!("registration was not accepted");
                    }
                }
                SubmitOutcome::Blocked(SubmitBlock::InvalidForm(errors)) => {
                    println!("{}", serde_json::to_string_pretty(&errors)?);
                    bail!("{} invalid field(s)", errors.len());
                }
                SubmitOutcome::Blocked(SubmitBlock::TermsNotAccepted) => {
                    bail!("{}", flow.submit_label());
                }
                SubmitOutcome::Ignored => bail!("a submission is already in flight"),
            }
        }
    }

    Ok(())
}
