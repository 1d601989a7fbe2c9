use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

mod manager;
mod store;
mod task;

use manager::TaskManager;
use store::Store;

#[derive(Parser)]
#[command(name = "tasktrack", about = "Interactive command-line task tracker")]
struct Args {
    /// Path of the task file
    #[arg(default_value = "tasks.json")]
    file: PathBuf,
}

fn main() {
    let args = Args::parse();
    let mut manager = TaskManager::new(Store::new(args.file));

    add_loop(&mut manager);
    update_loop(&mut manager);

    println!("Final task list:\n");
    println!("{}", manager.listing());
}

fn add_loop(manager: &mut TaskManager) {
    loop {
        let Some(answer) = prompt("Add a task? (yes/no): ") else {
            return;
        };
        match answer.to_lowercase().as_str() {
            "yes" => add_task(manager),
            "no" => return,
            _ => println!("Invalid option. Type 'yes' or 'no'."),
        }
    }
}

fn add_task(manager: &mut TaskManager) {
    let (Some(title), Some(description), Some(creation_date), Some(due_date)) = (
        prompt("Title: "),
        prompt("Description: "),
        prompt("Creation date (YYYY-MM-DD): "),
        prompt("Due date (YYYY-MM-DD): "),
    ) else {
        return;
    };

    match manager.add_task(title, description, creation_date, due_date) {
        Ok(()) => println!("Task added successfully!\n"),
        Err(err) => println!("{err}"),
    }
}

fn update_loop(manager: &mut TaskManager) {
    loop {
        let Some(answer) =
            prompt("Change a task's status (1) or remove a task (2)? (type 'quit' to finish): ")
        else {
            return;
        };
        match answer.to_lowercase().as_str() {
            "1" => {
                let Some(title) = prompt("Title of the task to complete: ") else {
                    return;
                };
                if manager.complete_task(&title) {
                    println!("Task '{title}' marked as Complete.\n");
                } else {
                    println!("Task not found.");
                }
            }
            "2" => {
                let Some(title) = prompt("Title of the task to remove: ") else {
                    return;
                };
                if manager.remove_task(&title) {
                    println!("Task '{title}' removed successfully!\n");
                } else {
                    println!("Task not found.");
                }
            }
            "quit" => return,
            _ => println!("Invalid option. Try again."),
        }
    }
}

/// Reads one trimmed line from stdin; None on EOF or read failure.
fn prompt(message: &str) -> Option<String> {
    print!("{message}");
    io::stdout().flush().ok()?;
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}
