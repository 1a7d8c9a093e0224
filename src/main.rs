use anyhow::{bail, Context};
use clap::Parser;
use portfolio_site::core::content::LegalSection;
use portfolio_site::core::modal::ModalClick;
use portfolio_site::core::{ContactField, DocumentHead, PageId};
use portfolio_site::utils::logger;
use portfolio_site::{Action, CliConfig, GithubProfileClient, HeadlessApp};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  goto <home|services|portfolio|contact|legal>
  menu                      toggle the mobile menu
  open | close              show or hide the GitHub modal
  click <backdrop|content|close>
  set <name|email|phone|subject|message> <value>
  submit                    submit the contact form
  section <editor|host|credits>
  wait <ms>                 advance the simulated clock
  show                      print the rendered document
  head                      print the document meta tags
  status
  quit";

#[derive(Debug, PartialEq)]
enum Command {
    Act(Action),
    Wait(Duration),
    Show,
    Head,
    Status,
    Help,
    Quit,
}

fn parse_command(line: &str) -> anyhow::Result<Command> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word {
        "goto" | "nav" => Command::Act(Action::Navigate(rest.parse::<PageId>()?)),
        "menu" => Command::Act(Action::ToggleMenu),
        "open" => Command::Act(Action::OpenModal),
        "close" => Command::Act(Action::CloseModal),
        "click" => Command::Act(Action::ModalClick(match rest {
            "backdrop" | "outside" => ModalClick::Backdrop,
            "content" | "inside" => ModalClick::Content,
            "close" => ModalClick::CloseButton,
            other => bail!("unknown click target '{}'", other),
        })),
        "set" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            Command::Act(Action::SetField(field.parse::<ContactField>()?, value.to_string()))
        }
        "submit" => Command::Act(Action::SubmitContact),
        "section" => Command::Act(Action::ToggleLegalSection(rest.parse::<LegalSection>()?)),
        "wait" => {
            let ms: u64 = rest
                .parse()
                .with_context(|| format!("'{}' is not a number of milliseconds", rest))?;
            Command::Wait(Duration::from_millis(ms))
        }
        "show" => Command::Show,
        "head" => Command::Head,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "" => bail!("empty command"),
        other => bail!("unknown command '{}', type 'help'", other),
    };
    Ok(command)
}

fn print_status(app: &HeadlessApp) {
    println!(
        "page={} menu_open={} modal={:?} clock={:?}",
        app.current_page(),
        app.menu_open(),
        app.modal_state(),
        app.now()
    );
    if let Some(alert) = app.contact_form().and_then(|form| form.alert()) {
        println!("alert={:?}: {}", alert.kind, alert.text);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting portfolio-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let mut app = HeadlessApp::headless(&config);

    if cli.offline {
        tracing::info!("Offline mode, profile will stay pending");
    } else {
        match GithubProfileClient::new(&config) {
            Ok(client) => {
                tracing::info!("🔍 Fetching profile from {}", client.endpoint());
                app.start(Arc::new(client));
            }
            // 讀取失敗只會讓彈窗停在載入中
            Err(e) => tracing::error!("❌ Could not build HTTP client: {}", e),
        }
    }

    print_status(&app);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                app.pump_events();

                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(Command::Show) => print!("{}", app.render()),
                    Ok(Command::Head) => {
                        for (name, content) in app.head().meta_entries() {
                            println!("<meta name=\"{}\" content=\"{}\">", name, content);
                        }
                    }
                    Ok(Command::Status) => print_status(&app),
                    Ok(Command::Wait(by)) => {
                        app.advance(by);
                        print_status(&app);
                    }
                    Ok(Command::Act(action)) => {
                        if !app.dispatch(action) {
                            println!("(nothing to do on page {})", app.current_page());
                        }
                        print_status(&app);
                    }
                    Err(e) => eprintln!("❌ {}", e),
                }
            }
            Some(event) = app.next_event() => {
                app.apply_event(event);
                tracing::info!("Profile settled, modal is {:?}", app.modal_state());
            }
        }
    }

    tracing::info!("👋 Bye");
    Ok(())
}
