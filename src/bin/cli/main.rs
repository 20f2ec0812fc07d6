use std::{env, process::exit};

use anyhow::Result;

use dotenvy::dotenv;
use reedline::Signal;
use tracing_subscriber::EnvFilter;

mod command_parser;
mod intents;
mod prompt;
mod repl;
mod screens;

use bookshelf::{
    config::Config, googlebooks::GoogleBooksClient, repository::GoogleBooksRepository,
    viewmodel::BookshelfViewModel,
};

struct App {
    config: Config,
    viewmodel: BookshelfViewModel<GoogleBooksRepository>,
    /// Presentation-local author filter; dropped on every new search.
    author_filter: Option<String>,
}

impl App {
    fn print_list(&self) -> Result<()> {
        print!(
            "{}",
            screens::list(
                self.viewmodel.state(),
                self.author_filter.as_deref(),
                &self.config
            )?
        );
        Ok(())
    }
}

async fn handle_command(command: String, app: &mut App) -> Result<()> {
    let args = command_parser::arg_parser();
    let command = shlex::split(&command);
    if let None = command {
        anyhow::bail!("Invalid command");
    }
    let command = command.unwrap();
    let matches = args.try_get_matches_from(command);
    if let Err(e) = matches {
        anyhow::bail!(e);
    }
    let matches = matches.unwrap();
    match matches.subcommand() {
        Some(("search", _matches)) => {
            let term = _matches
                .get_many::<String>("TERM")
                .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            app.author_filter = None;
            app.viewmodel.search(&term).await;
            app.print_list()?;
        }
        Some(("retry", _matches)) => {
            // Deliberately re-runs the default query, not the last term;
            // that is what the retry action has always done.
            app.author_filter = None;
            app.viewmodel.search("").await;
            app.print_list()?;
        }
        Some(("list", _matches)) => {
            app.print_list()?;
        }
        Some(("show", _matches)) => {
            let id = _matches.get_one::<String>("ID").expect("ID is required");
            match app.viewmodel.lookup(id) {
                Some(book) => print!("{}", screens::detail(book, &app.config)?),
                None => anyhow::bail!("no book {id} in the current results"),
            }
        }
        Some(("authors", _matches)) => {
            print!(
                "{}",
                screens::authors(&app.viewmodel.authors(), &app.config)?
            );
        }
        Some(("filter", _matches)) => {
            let author = match _matches.get_many::<String>("AUTHOR") {
                Some(words) => words.cloned().collect::<Vec<_>>().join(" "),
                None => {
                    // The dialog shows the names sorted; the index itself
                    // keeps upstream order.
                    let mut authors = app.viewmodel.authors();
                    if authors.is_empty() {
                        anyhow::bail!("no authors in the current results");
                    }
                    authors.sort();
                    inquire::Select::new("Filter by which author?", authors).prompt()?
                }
            };
            app.author_filter = Some(author);
            app.print_list()?;
        }
        Some(("clear", _matches)) => {
            app.author_filter = None;
            app.print_list()?;
        }
        Some(("buy", _matches)) => {
            let id = _matches.get_one::<String>("ID").expect("ID is required");
            match app.viewmodel.lookup(id) {
                Some(book) => intents::shop_search(&app.config.purchase_search_url, &book.title),
                None => anyhow::bail!("no book {id} in the current results"),
            }
        }
        Some(("open", _matches)) => {
            let id = _matches.get_one::<String>("ID").expect("ID is required");
            match app.viewmodel.lookup(id) {
                Some(book) => match &book.canonical_link {
                    Some(link) => intents::launch(link),
                    None => anyhow::bail!("book {id} has no catalog page"),
                },
                None => anyhow::bail!("no book {id} in the current results"),
            }
        }
        Some(("config", _matches)) => match _matches.subcommand() {
            Some(("print-default", _matches)) => {
                println!("{}", Config::default_as_string()?);
            }
            Some((name, _matches)) => unimplemented!("{}", name),
            None => unreachable!("subcommand required"),
        },
        Some(("about", _matches)) => {
            print!("{}", screens::about(&app.config)?);
        }
        Some(("contact", _matches)) => match _matches.subcommand() {
            Some(("phone", _matches)) => intents::dial(&app.config.contact_phone),
            Some(("email", _matches)) => intents::email(&app.config.contact_email),
            Some((name, _matches)) => unimplemented!("{}", name),
            None => unreachable!("subcommand required"),
        },
        Some(("exit", _matches)) => {
            exit(0);
        }
        Some((name, _matches)) => unimplemented!("{}", name),
        None => unreachable!("subcommand required"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("BOOKSHELF_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args_parsed = command_parser::arg_parser_cli().get_matches_from(env::args_os().skip(1));

    let config = Config::read_config()?;
    let client = GoogleBooksClient::new(&config.api_base_url)?;
    let viewmodel = BookshelfViewModel::new(GoogleBooksRepository::new(client));
    let mut app = App {
        config,
        viewmodel,
        author_filter: None,
    };

    if let Some(("repl", _)) = args_parsed.subcommand() {
        let history_file = app.config.history_location.clone();
        let mut repl = repl::Repl::new(command_parser::generate_completions(), &history_file);
        // Populate the shelf before the first prompt.
        app.viewmodel.search("").await;
        app.print_list()?;
        loop {
            match repl.read_line() {
                Ok(Signal::Success(buffer)) => {
                    match handle_command(buffer.clone(), &mut app).await {
                        Ok(_) => (),
                        Err(e) => println!("Error: {}", e),
                    };
                }
                Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => {
                    println!("\nAborted!");
                    break;
                }
                x => {
                    println!("Event: {:?}", x);
                }
            }
        }
    } else {
        let args = env::args_os()
            .skip(1)
            .map(|x| x.into_string().expect("Invalid unicode in arguments"))
            .collect::<Vec<String>>()
            .join(" ");
        handle_command(args, &mut app).await?;
    }

    Ok(())
}
