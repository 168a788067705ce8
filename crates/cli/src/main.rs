use std::io::{self, Write};

use agency_core::{
    catalog, faqs, features, find_destination, respond, Destination, FormEdit,
};
use agency_observability::{init_tracing, AppMetrics};
use agency_session::{SessionTiming, VisitorSession};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

#[derive(Debug, Parser)]
#[command(name = "agency")]
#[command(about = "TimeTravel Agency booking and concierge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Destinations,
    Features,
    Faq,
    Quote {
        #[arg(long, default_value = "paris-1889")]
        destination: String,
        #[arg(long, default_value_t = 2)]
        travelers: u32,
    },
    Book {
        #[arg(long, default_value = "paris-1889")]
        destination: String,
        #[arg(long, default_value_t = 2)]
        travelers: u32,
        #[arg(long)]
        date: String,
        #[arg(long)]
        name: String,
        #[arg(long, env = "AGENCY_BOOKING_EMAIL")]
        email: String,
    },
    Ask {
        text: String,
    },
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("agency_cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Destinations => {
            let entries = catalog()
                .iter()
                .map(destination_json)
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Command::Features => {
            println!("{}", serde_json::to_string_pretty(features())?);
        }
        Command::Faq => {
            for entry in faqs() {
                println!("Q: {}\nA: {}\n", entry.question, entry.answer);
            }
        }
        Command::Quote {
            destination,
            travelers,
        } => {
            let session = VisitorSession::new(SessionTiming::immediate(), AppMetrics::shared());
            session.booking.apply(FormEdit::Destination(destination))?;
            session.booking.apply(FormEdit::Travelers(travelers))?;
            let summary = session.booking.summary().context("cannot price this booking")?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Book {
            destination,
            travelers,
            date,
            name,
            email,
        } => {
            find_destination(&destination).context("invalid --destination value")?;

            let session = VisitorSession::new(SessionTiming::from_env(), AppMetrics::shared());
            session.booking.apply(FormEdit::Destination(destination))?;
            session.booking.apply(FormEdit::Travelers(travelers))?;
            session.booking.apply(FormEdit::DepartureDate(date))?;
            session.booking.apply(FormEdit::FullName(name))?;
            session.booking.apply(FormEdit::Email(email))?;

            if let Err(errors) = session.booking.validate() {
                for error in &errors {
                    eprintln!("- {error}");
                }
            }

            println!("Processing...");
            let receipt = session.booking.submit().await?;
            println!("Booking Confirmed! Check your email for details.");
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
        Command::Ask { text } => {
            println!("{}", respond(&text));
        }
        Command::Chat => run_chat().await?,
    }

    Ok(())
}

async fn run_chat() -> Result<()> {
    let metrics = AppMetrics::shared();
    let session = VisitorSession::new(SessionTiming::from_env(), metrics.clone());
    session.chat.set_open(true);

    println!("TimeTravel Assistant. type 'exit' to quit.");
    if let Some(greeting) = session.chat.messages().first() {
        println!("\n{}\n", greeting.text);
    }

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some(pending) = session.chat.accept(message) else {
            continue;
        };

        println!("...");
        if let Some(reply) = session.chat.deliver(pending).await {
            println!("\n{}\n", reply.text);
        }
    }

    session.teardown();
    println!("{}", serde_json::to_string_pretty(&metrics.snapshot())?);
    Ok(())
}

fn destination_json(destination: &Destination) -> serde_json::Value {
    json!({
        "code": destination.code,
        "title": destination.title,
        "subtitle": destination.subtitle,
        "description": destination.description,
        "period": destination.period,
        "location": destination.location,
        "capacity": destination.capacity_label(),
        "booking_label": destination.booking_label(),
    })
}
