//! `flavorfind shell`: a line-driven loop over one long-lived [`App`].
//!
//! Each line is tokenized with shell-style quoting and parsed by clap in
//! multicall mode, so `create --name "Chez Nous"` works as expected.

use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ff_app::App;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::cli::subcommands::VenueCreateArgs;
use crate::commands;
use crate::output::output_screen;

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Render the current view.
    Show,
    /// Backend connectivity and current session.
    Status,
    /// Open a restaurant's menu.
    Select { venue_id: String },
    /// Close the open menu.
    Back,
    /// Reload restaurants and the open menu.
    Refresh,
    /// Add a restaurant (owners only).
    Create(VenueCreateArgs),
    Login(LoginArgs),
    Logout,
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Quit,
}

/// Handle `flavorfind shell`.
pub async fn handle(app: &mut App, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_screen(&app.screen(), flags.format)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(app)?;
        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };
        match execute(app, &line, flags).await {
            Ok(ShellFlow::Quit) => break,
            Ok(ShellFlow::Continue) => {}
            Err(error) => eprintln!("error: {error:#}"),
        }
    }
    Ok(())
}

fn prompt(app: &App) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "flavorfind:{}> ", app.screen().name())?;
    stdout.flush()?;
    Ok(())
}

/// Run one input line against the app.
pub async fn execute(app: &mut App, line: &str, flags: &GlobalFlags) -> anyhow::Result<ShellFlow> {
    let words = split_words(line)?;
    if words.is_empty() {
        return Ok(ShellFlow::Continue);
    }

    let parsed = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(error) => {
            let _ = error.print();
            return Ok(ShellFlow::Continue);
        }
    };

    match parsed.command {
        ShellCommand::Quit => return Ok(ShellFlow::Quit),
        ShellCommand::Show => {}
        ShellCommand::Status => return commands::status::handle(app, flags).map(|()| ShellFlow::Continue),
        ShellCommand::Select { venue_id } => {
            commands::require_login(app)?;
            app.select_venue(&venue_id).await?;
        }
        ShellCommand::Back => app.back()?,
        ShellCommand::Refresh => app.refresh().await,
        ShellCommand::Create(args) => commands::venues::create(&args, app, flags).await?,
        ShellCommand::Login(args) => {
            return commands::login::handle(&args, app, flags)
                .await
                .map(|()| ShellFlow::Continue);
        }
        ShellCommand::Logout => app.logout().await,
    }

    output_screen(&app.screen(), flags.format)?;
    Ok(ShellFlow::Continue)
}

/// Split a line into words. Single and double quotes group words and a
/// backslash escapes the next character outside single quotes.
fn split_words(line: &str) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => {
                let escaped = chars.next().context("dangling escape at end of line")?;
                current.push(escaped);
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        anyhow::bail!("unterminated {q} quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ff_app::{AppContext, RecordingNotifier};
    use ff_backend::MockBackend;
    use ff_config::FlavorConfig;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            color: ColorMode::Never,
            quiet: true,
            verbose: false,
        }
    }

    fn app(backend: MockBackend) -> App {
        App::new(AppContext::new(
            FlavorConfig::default(),
            Arc::new(backend),
            Arc::new(RecordingNotifier::new()),
        ))
    }

    #[test]
    fn split_words_honours_quotes_and_escapes() {
        assert_eq!(
            split_words(r#"create --name "Chez Nous" --address '1 Rue d\Or' x\ y"#).unwrap(),
            ["create", "--name", "Chez Nous", "--address", r"1 Rue d\Or", "x y"]
        );
        assert_eq!(split_words(r#"select "" "#).unwrap(), ["select", ""]);
        assert!(split_words("   ").unwrap().is_empty());
    }

    #[test]
    fn split_words_rejects_unterminated_quote() {
        assert!(split_words(r#"create --name "Chez"#).is_err());
        assert!(split_words("back \\").is_err());
    }

    #[test]
    fn shell_line_parses_commands() {
        let parsed = ShellLine::try_parse_from(["select", "r1"]).expect("parse");
        assert!(matches!(parsed.command, ShellCommand::Select { ref venue_id } if venue_id == "r1"));

        let parsed = ShellLine::try_parse_from(["exit"]).expect("parse");
        assert!(matches!(parsed.command, ShellCommand::Quit));

        let parsed = ShellLine::try_parse_from(["login", "--demo", "owner"]).expect("parse");
        assert!(matches!(parsed.command, ShellCommand::Login(_)));
    }

    #[tokio::test]
    async fn quit_and_blank_lines() {
        let mut app = app(MockBackend::new());
        assert_eq!(execute(&mut app, "", &flags()).await.unwrap(), ShellFlow::Continue);
        assert_eq!(execute(&mut app, "quit", &flags()).await.unwrap(), ShellFlow::Quit);
    }

    #[tokio::test]
    async fn unknown_command_keeps_the_loop_running() {
        let mut app = app(MockBackend::new());
        let flow = execute(&mut app, "teleport", &flags()).await.unwrap();
        assert_eq!(flow, ShellFlow::Continue);
    }

    #[tokio::test]
    async fn select_on_landing_reports_login_hint() {
        let mut app = app(MockBackend::new());
        let err = execute(&mut app, "select r1", &flags()).await.unwrap_err();
        assert!(err.to_string().starts_with("not logged in"));
    }

    #[tokio::test]
    async fn logout_on_landing_is_harmless() {
        let mut backend = MockBackend::new();
        backend.expect_logout().times(1).returning(|| Ok(()));
        let mut app = app(backend);

        let flow = execute(&mut app, "logout", &flags()).await.unwrap();
        assert_eq!(flow, ShellFlow::Continue);
        assert!(app.view().is_landing());
    }
}
