use clap::Parser;
use std::process;

use taskdeck::cli;
use taskdeck::cli::commands::{Cli, Commands};

fn main() {
    env_logger::init();

    let cli_args = Cli::parse();
    let json_output = cli_args.json;
    let sheet_flag = cli_args.sheet.clone();
    let sheet = sheet_flag.as_deref();

    let exit_code = match cli_args.command {
        Commands::Init { url, page_size } => cli::init::run(&url, page_size, json_output),
        Commands::List {
            search,
            priority,
            page,
            html,
        } => cli::list::run(&search, priority.as_deref(), page, html, json_output, sheet),
        Commands::Add {
            title,
            description,
            priority,
            deadline,
        } => cli::task::run_add(
            &title,
            &description,
            &priority,
            deadline.as_deref(),
            json_output,
            sheet,
        ),
        Commands::Edit {
            id,
            title,
            description,
            priority,
            deadline,
        } => cli::task::run_edit(
            &id,
            cli::task::EditArgs {
                title: title.as_deref(),
                description: description.as_deref(),
                priority: priority.as_deref(),
                deadline: deadline.as_deref(),
            },
            json_output,
            sheet,
        ),
        Commands::Delete { id, yes } => cli::task::run_delete(&id, yes, json_output, sheet),
        Commands::Show { id } => cli::task::run_show(&id, json_output, sheet),
        Commands::Sheet(cmd) => cli::sheet::run(cmd, json_output),
    };

    process::exit(exit_code);
}
