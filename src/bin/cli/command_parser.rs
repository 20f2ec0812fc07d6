use clap::{Arg, Command};

pub fn arg_parser() -> Command {
    Command::new("bookshelf")
        .about("Browse the Google Books catalog")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("search")
                .about("Search the catalog (no term runs the default query)")
                .arg(Arg::new("TERM").num_args(0..)),
        )
        .subcommand(Command::new("list").about("Show the current result grid"))
        .subcommand(
            Command::new("show")
                .about("Show details of one book from the current results")
                .arg(Arg::new("ID").required(true)),
        )
        .subcommand(Command::new("authors").about("List every author in the current results"))
        .subcommand(
            Command::new("filter")
                .about("Only list books by one author (no name opens a picker)")
                .arg(Arg::new("AUTHOR").num_args(0..)),
        )
        .subcommand(Command::new("clear").about("Drop the author filter"))
        .subcommand(
            Command::new("buy")
                .about("Open a shop search for a book in the browser")
                .arg(Arg::new("ID").required(true)),
        )
        .subcommand(
            Command::new("open")
                .about("Open a book's catalog page in the browser")
                .arg(Arg::new("ID").required(true)),
        )
        .subcommand(Command::new("retry").about("Run the default query again"))
        .subcommand(
            Command::new("config")
                .about("Configuration helpers")
                .subcommand_required(true)
                .subcommand(Command::new("print-default")),
        )
        .subcommand(Command::new("about").about("About this program"))
        .subcommand(
            Command::new("contact")
                .about("Reach out to the maintainer")
                .subcommand_required(true)
                .subcommand(Command::new("phone"))
                .subcommand(Command::new("email")),
        )
        .subcommand(Command::new("exit").about("Quit"))
}

pub fn arg_parser_cli() -> Command {
    arg_parser().subcommand(Command::new("repl").about("Launch a read eval print loop"))
}

pub fn generate_completions() -> Vec<String> {
    let cmd = arg_parser();
    fn add_command(parent_fn_name: &str, cmd: &Command, subcmds: &mut Vec<String>) {
        let fn_name = format!(
            "{parent_fn_name} {cmd_name}",
            parent_fn_name = parent_fn_name,
            cmd_name = cmd.get_name().to_string()
        )
        .trim()
        .to_string();
        subcmds.push(fn_name.clone());
        for subcmd in cmd.get_subcommands() {
            add_command(&fn_name, subcmd, subcmds);
        }
    }
    let mut subcmds = vec![];
    for subcmd in cmd.get_subcommands() {
        add_command(&"", subcmd, &mut subcmds);
    }
    subcmds.sort();
    subcmds
}
