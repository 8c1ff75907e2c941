use clap::Parser;
use jotter::cli::{
    handle_add, handle_categories, handle_clients, handle_delete, handle_edit, handle_list,
    handle_show, Cli, Commands,
};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            title,
            message,
            category,
            client,
            json,
        } => handle_add(title, message, category, client, json),
        Commands::List { json } => handle_list(json),
        Commands::Show { id, json } => handle_show(id, json),
        Commands::Edit {
            id,
            title,
            message,
            category,
            client,
            json,
        } => handle_edit(id, title, message, category, client, json),
        Commands::Delete { id, force } => handle_delete(id, force),
        Commands::Categories { json } => handle_categories(json),
        Commands::Clients { json } => handle_clients(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
