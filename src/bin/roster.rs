//! Roster CLI
//!
//! Command-line interface for managing the student roster file.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use roster::{Command, Config, Loader, Outcome, RosterManager, Student};
use tracing_subscriber::{fmt, EnvFilter};

/// Roster CLI
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Manage a roster of student records")]
#[command(version)]
struct Args {
    /// Data file holding one record per line
    #[arg(short, long, default_value = "students.txt")]
    data_file: PathBuf,

    /// Show the loading ticker before commands that change the roster
    #[arg(short, long)]
    loading: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new student
    Add {
        /// Unique roll number
        roll: u32,

        /// Student name
        name: String,

        /// Email address
        email: String,

        /// Course name
        course: String,

        /// Marks between 0 and 100
        marks: f64,
    },

    /// List all students
    List,

    /// Show one student by roll number
    Get {
        /// The roll number to look up
        roll: u32,
    },

    /// Search students by name (case-insensitive)
    Search {
        /// The name to search for
        name: String,
    },

    /// Delete one student by roll number
    Delete {
        /// The roll number to delete
        roll: u32,
    },

    /// Delete every student with the given name (case-insensitive)
    DeleteName {
        /// The name to delete
        name: String,
    },

    /// Update a student's name, email, course and marks
    Update {
        /// Roll number of the student to update
        roll: u32,

        /// New name
        name: String,

        /// New email address
        email: String,

        /// New course name
        course: String,

        /// New marks between 0 and 100
        marks: f64,
    },

    /// Sort the roster by marks, highest first
    Sort,
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Add {
                roll,
                name,
                email,
                course,
                marks,
            } => Command::Add {
                roll_number: roll,
                name,
                email,
                course,
                marks,
            },
            Commands::List => Command::List,
            Commands::Get { roll } => Command::Get { roll_number: roll },
            Commands::Search { name } => Command::Search { name },
            Commands::Delete { roll } => Command::Delete { roll_number: roll },
            Commands::DeleteName { name } => Command::DeleteByName { name },
            Commands::Update {
                roll,
                name,
                email,
                course,
                marks,
            } => Command::Update {
                roll_number: roll,
                name,
                email,
                course,
                marks,
            },
            Commands::Sort => Command::Sort,
        }
    }
}

fn main() {
    // Initialize tracing/logging (stderr, so stdout only carries results)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,roster=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_file(&args.data_file)
        .show_loading(args.loading)
        .build();

    if let Err(e) = run(config, args.command.into()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(config: Config, command: Command) -> roster::Result<()> {
    let mut manager = RosterManager::open(config)?;
    let is_mutation = command.is_mutation();

    if is_mutation {
        Loader::from_config(manager.config()).run(&mut io::stdout())?;
    }

    let outcome = manager.execute(command.clone())?;
    render(&command, &outcome);

    if is_mutation {
        manager.save()?;
    }

    Ok(())
}

fn render(command: &Command, outcome: &Outcome) {
    match (command, outcome) {
        (Command::Add { .. }, Outcome::Student(s)) => {
            println!("Student added successfully.");
            print_student(s);
        }
        (Command::Update { .. }, Outcome::Student(s)) => {
            println!("Student record updated.");
            print_student(s);
        }
        (Command::Delete { .. }, Outcome::Student(s)) => {
            println!("Student record deleted: {} ({})", s.name(), s.roll_number());
        }
        (Command::DeleteByName { name }, Outcome::Removed(0)) => {
            println!("No student found with name {}", name);
        }
        (Command::DeleteByName { .. }, Outcome::Removed(count)) => {
            println!("{} student record(s) deleted.", count);
        }
        (Command::Search { name }, Outcome::Students(found)) if found.is_empty() => {
            println!("No student found with name {}", name);
        }
        (Command::Sort, Outcome::Students(students)) => {
            println!("Sorted Student List by Marks:");
            students.iter().for_each(print_student);
        }
        (_, Outcome::Empty) => println!("No student records found."),
        (_, outcome) => outcome.students().iter().for_each(print_student),
    }
}

fn print_student(student: &Student) {
    println!("Roll No: {}", student.roll_number());
    println!("Name: {}", student.name());
    println!("Email: {}", student.email());
    println!("Course: {}", student.course());
    println!("Marks: {}", student.marks());
    println!("Grade: {}", student.grade());
    println!("------------------");
}
