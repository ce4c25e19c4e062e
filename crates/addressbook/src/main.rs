//! `addrbook` - CLI for addressbook
//!
//! Without a subcommand this runs the interactive contact menu on the
//! terminal. Subcommands report on the contact file and configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use addressbook::cli::{Cli, Command, ConfigCommand};
use addressbook::{init_logging, Config, ConsoleUserInterface, Directory, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration; --file wins over every other source
    let config = Config::load_from(cli.config.clone())?.with_contacts_path(cli.file.clone());
    config.validate()?;

    match cli.command {
        None => run_menu(&config),
        Some(Command::Status(status_cmd)) => handle_status(&config, status_cmd.json),
        Some(Command::Config(config_cmd)) => handle_config(&config, config_cmd),
    }
}

fn run_menu(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open(config.contacts_path())?;
    let mut ui = ConsoleUserInterface::stdio();
    session.run(&mut ui)?;
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = config.contacts_path();
    let mut directory = Directory::new();
    directory.load(&path)?;
    let stats = directory.stats(&path)?;

    if json {
        let status = serde_json::json!({
            "contacts_path": path.display().to_string(),
            "contacts": stats.contacts,
            "file_exists": stats.file_exists,
            "file_size_bytes": stats.file_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("addrbook status");
        println!("---------------");
        println!("Contact file:  {}", path.display());
        println!(
            "File:          {}",
            if stats.file_exists {
                format!("{} bytes", stats.file_size_bytes)
            } else {
                "not created yet".to_string()
            }
        );
        println!("Contacts:      {}", stats.contacts);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Contact file:       {}", config.contacts_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { target } => {
            let path = target.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::check_file(&path)?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
