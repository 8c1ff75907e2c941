use std::env;
use std::io;
use std::path::PathBuf;

use crate::entity::{Category, Client, Note};
use crate::error::{JotterError, Result};
use crate::reference::ReferenceData;
use crate::session::Session;

/// Find the store root by looking for an existing .jotter/ in the current
/// directory or any parent. Falls back to the current directory, where the
/// store is then created on first use.
fn find_store_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".jotter").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_session() -> Result<Session> {
    Session::open(&find_store_root())
}

/// Find a note by exact id, then by a decimal prefix of the id.
fn find_note<'a>(notes: &'a [Note], id: &str) -> Option<&'a Note> {
    if let Ok(full) = id.parse::<i64>() {
        if let Some(note) = notes.iter().find(|n| n.id == full) {
            return Some(note);
        }
    }
    notes.iter().find(|n| n.id.to_string().starts_with(id))
}

pub fn handle_add(
    title: Option<String>,
    message: Option<String>,
    category: Option<String>,
    client: Option<String>,
    json: bool,
) -> Result<()> {
    let reference = ReferenceData::load()?;
    let mut session = open_session()?;

    session.open_for_create();
    session.set_title(title.unwrap_or_default());
    session.set_message(message.unwrap_or_default());
    if let Some(name) = category {
        session.set_category(Some(resolve_category(&reference, &name)?));
    }
    if let Some(name) = client {
        session.set_client(Some(resolve_client(&reference, &name)?));
    }
    let id = session.commit();

    let note = saved_note(&session, id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note {} - {}", note.id, note.title);
    }

    Ok(())
}

pub fn handle_list(json: bool) -> Result<()> {
    let session = open_session()?;
    let notes = session.list();

    if json {
        println!("{}", serde_json::to_string_pretty(notes)?);
    } else if notes.is_empty() {
        println!("No notes, try adding a new one!");
    } else {
        println!("All your notes:\n");
        for note in notes {
            println!("  {}  {}", note.id, note.title);
            if let Some(category) = &note.category {
                println!("      category: {}", category.name);
            }
            if let Some(client) = &note.client {
                println!("      client: {}", client.full_name());
            }
        }
    }

    Ok(())
}

pub fn handle_show(id: String, json: bool) -> Result<()> {
    let session = open_session()?;

    let note = match find_note(session.list(), &id) {
        Some(note) => note,
        None => return Err(JotterError::NoteNotFound(id)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("Note {}", note.id);
        if let Some(created) = note.created_at() {
            println!("Created: {}", created.format("%Y-%m-%d %H:%M"));
        }
        println!("Title: {}", note.title);
        if let Some(category) = &note.category {
            println!("Category: {}", category.name);
        }
        if let Some(client) = &note.client {
            println!("Client: {}", client.full_name());
        }
        if !note.message.is_empty() {
            println!("\n{}", note.message);
        }
    }

    Ok(())
}

fn resolve_category(reference: &ReferenceData, name: &str) -> Result<Category> {
    reference
        .category(name)
        .cloned()
        .ok_or_else(|| JotterError::UnknownCategory(name.to_string()))
}

fn resolve_client(reference: &ReferenceData, name: &str) -> Result<Client> {
    reference
        .client(name)
        .cloned()
        .ok_or_else(|| JotterError::UnknownClient(name.to_string()))
}

fn saved_note(session: &Session, id: i64) -> Result<Note> {
    session
        .list()
        .iter()
        .find(|n| n.id == id)
        .cloned()
        .ok_or_else(|| JotterError::Storage("Failed to retrieve saved note".to_string()))
}

pub fn handle_edit(
    id: String,
    title: Option<String>,
    message: Option<String>,
    category: Option<String>,
    client: Option<String>,
    json: bool,
) -> Result<()> {
    let reference = ReferenceData::load()?;
    let mut session = open_session()?;

    let note = match find_note(session.list(), &id) {
        Some(note) => note.clone(),
        None => return Err(JotterError::NoteNotFound(id)),
    };

    // The buffer starts from the stored note; command-line fields overwrite
    // only what was given.
    session.open_for_edit(&note);
    if let Some(title) = title {
        session.set_title(title);
    }
    if let Some(message) = message {
        session.set_message(message);
    }
    if let Some(name) = category {
        session.set_category(Some(resolve_category(&reference, &name)?));
    }
    if let Some(name) = client {
        session.set_client(Some(resolve_client(&reference, &name)?));
    }
    let new_id = session.commit();

    let saved = saved_note(&session, new_id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("Saved note {} - {}", saved.id, saved.title);
    }

    Ok(())
}

pub fn handle_delete(id: String, force: bool) -> Result<()> {
    let mut session = open_session()?;

    let note = match find_note(session.list(), &id) {
        Some(note) => note.clone(),
        None => return Err(JotterError::NoteNotFound(id)),
    };

    // Confirm deletion unless --force is used
    if !force {
        eprintln!("Delete note {} - {}? [y/N] ", note.id, note.title);

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(JotterError::Storage(
                "Use --force to delete in non-interactive mode".to_string(),
            ));
        }
    }

    session.open_for_edit(&note);
    session.request_delete();

    println!("Deleted note {} - {}", note.id, note.title);

    Ok(())
}

pub fn handle_categories(json: bool) -> Result<()> {
    let reference = ReferenceData::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(reference.categories())?);
    } else {
        println!("Select category:\n");
        for category in reference.categories() {
            println!("  {}", category.name);
        }
    }

    Ok(())
}

pub fn handle_clients(json: bool) -> Result<()> {
    let reference = ReferenceData::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(reference.clients())?);
    } else {
        println!("Select client:\n");
        for client in reference.clients() {
            println!("  {}", client.full_name());
        }
    }

    Ok(())
}
