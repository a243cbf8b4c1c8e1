// Terminal stand-in for the reception form: each input line is one button press.

use crate::core::registry::DepartmentRegistry;
use crate::domain::model::ServeOutcome;
use crate::utils::error::{HospitalError, Result};
use crate::utils::validation::{parse_age, validate_required_field};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const PROMPT: &str = "> ";

pub const HELP_TEXT: &str = "\
Commands:
  add <department> <name> <age> <complaint>   Register a patient
  serve <department>                          Serve the next patient
  display                                     Show all queues
  json                                        Show all queues as JSON
  help                                        Show this message
  exit                                        Leave the form
Quote a department or name that contains spaces, e.g. add \"General Medicine\" \"Ann Lee\" 41 Sore throat
Wrap values with an apostrophe in double quotes, e.g. add Surgery \"O'Brien\" 60 Hip pain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        department: String,
        name: String,
        age: String,
        complaint: String,
    },
    Serve {
        department: String,
    },
    Display,
    Json,
    Help,
    Exit,
    Unknown(String),
    Malformed,
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let Some(parts) = shlex::split(trimmed) else {
        return Some(Command::Malformed);
    };
    let mut parts = parts.into_iter();
    let word = parts.next().unwrap_or_default();

    let command = match word.to_lowercase().as_str() {
        "add" => Command::Add {
            department: parts.next().unwrap_or_default(),
            name: parts.next().unwrap_or_default(),
            age: parts.next().unwrap_or_default(),
            // The complaint is the rest of the line, so it needs no quotes.
            complaint: parts.collect::<Vec<_>>().join(" "),
        },
        "serve" => Command::Serve {
            department: parts.collect::<Vec<_>>().join(" "),
        },
        "display" | "show" | "list" => Command::Display,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "exit" | "quit" => Command::Exit,
        _ => Command::Unknown(word),
    };
    Some(command)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Exit,
}

/// Owns the registry for one run and turns raw form input into replies.
#[derive(Debug, Default)]
pub struct FormSession {
    registry: DepartmentRegistry,
}

impl FormSession {
    pub fn new(registry: DepartmentRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DepartmentRegistry {
        &self.registry
    }

    /// "Add Patient": age is checked before the other fields.
    pub fn add_patient(&mut self, department: &str, name: &str, age: &str, complaint: &str) -> String {
        match self.try_add_patient(department, name, age, complaint) {
            Ok(()) => format!("Patient added successfully!\n\n{}", self.registry.render_state()),
            Err(e) => {
                tracing::warn!("Add patient rejected: {}", e);
                e.user_friendly_message()
            }
        }
    }

    fn try_add_patient(&mut self, department: &str, name: &str, age: &str, complaint: &str) -> Result<()> {
        let (department, name, complaint) = (department.trim(), name.trim(), complaint.trim());
        let age = parse_age(age)?;
        validate_required_field("department", department)?;
        validate_required_field("name", name)?;
        validate_required_field("complaint", complaint)?;

        self.registry.enqueue_patient(department, name, age, complaint)?;
        tracing::info!("Registered {} in {}", name, department);
        Ok(())
    }

    /// "Serve Patient".
    pub fn serve_patient(&mut self, department: &str) -> String {
        let department = department.trim();
        if department.is_empty() {
            return HospitalError::MissingDepartment.user_friendly_message();
        }

        let headline = match self.registry.serve_patient(department) {
            Ok(ServeOutcome::Served(patient)) => {
                tracing::info!("Served {} from {}", patient.name(), department);
                format!(
                    "Served: {}, Age: {}, Complaint: {}",
                    patient.name(),
                    patient.age(),
                    patient.complaint()
                )
            }
            Ok(ServeOutcome::NoPatientWaiting) => {
                tracing::info!("Serve requested on empty queue {}", department);
                format!("No patient in {} queue!", department)
            }
            Err(e) => {
                tracing::warn!("Serve rejected: {}", e);
                return HospitalError::from(e).user_friendly_message();
            }
        };
        format!("{}\n\n{}", headline, self.registry.render_state())
    }

    /// "Display Patients".
    pub fn display(&self) -> String {
        self.registry.render_state()
    }

    pub fn display_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.registry.snapshot())?)
    }

    pub fn handle(&mut self, command: Command) -> Result<Reply> {
        let text = match command {
            Command::Add {
                department,
                name,
                age,
                complaint,
            } => self.add_patient(&department, &name, &age, &complaint),
            Command::Serve { department } => self.serve_patient(&department),
            Command::Display => self.display(),
            Command::Json => self.display_json()?,
            Command::Help => HELP_TEXT.to_string(),
            Command::Exit => return Ok(Reply::Exit),
            Command::Unknown(word) => {
                format!("Unknown command: {}. Type 'help' for commands.", word)
            }
            Command::Malformed => "Could not read that line: unbalanced quotes. \
                                   Wrap values with an apostrophe in double quotes, e.g. \"O'Brien\"."
                .to_string(),
        };
        Ok(Reply::Text(text))
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Option<Reply>> {
        match parse_command(line) {
            Some(command) => {
                tracing::debug!("Command: {:?}", command);
                self.handle(command).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Drives the form until EOF or `exit`. Returns the number of commands handled.
    pub async fn run<R, W>(&mut self, reader: R, writer: &mut W, prompt: bool) -> Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut handled = 0;

        loop {
            if prompt {
                writer.write_all(PROMPT.as_bytes()).await?;
                writer.flush().await?;
            }
            let Some(line) = lines.next_line().await? else {
                break;
            };

            match self.handle_line(&line)? {
                Some(Reply::Exit) => {
                    handled += 1;
                    break;
                }
                Some(Reply::Text(mut text)) => {
                    handled += 1;
                    if !text.ends_with('\n') {
                        text.push('\n');
                    }
                    writer.write_all(text.as_bytes()).await?;
                }
                None => {}
            }
        }

        writer.flush().await?;
        Ok(handled)
    }
}
