use std::io::Write;

use anyhow::{Context, Result};
use taskdeck_app_core::{AppStore, HttpApi, HttpKernel, LoginForm};
use taskdeck_core::{AuthMe, EntityStatus, UpdateTodolistTitle};
use taskdeck_infra::ApiSettings;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::{parse_shell_line, Command, ShellCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Rejected,
}

pub fn connect(settings: &ApiSettings) -> Result<HttpKernel> {
    let api = HttpApi::from_settings(settings).context("Failed to build HTTP client")?;
    Ok(HttpKernel::over_http(AppStore::default(), api))
}

/// Restores the session the way the app does on start-up. Not being logged
/// in is not an error here.
pub async fn restore_session(kernel: &HttpKernel) -> Option<AuthMe> {
    kernel.initialize_app().await.ok()
}

pub async fn execute(
    kernel: &HttpKernel,
    command: Command,
    out: &mut impl Write,
) -> Result<Outcome> {
    debug!(?command, "execute");
    let outcome = match command {
        Command::Me if !kernel.state().auth.is_logged_in => {
            writeln!(out, ":: Not logged in")?;
            Outcome::Rejected
        }
        Command::Me => match kernel.fetch_me().await {
            Ok(me) => {
                writeln!(out, ":: Logged in as {} <{}> (id {})", me.login, me.email, me.id)?;
                Outcome::Done
            }
            Err(_) => {
                writeln!(out, ":: Not logged in")?;
                Outcome::Rejected
            }
        },
        Command::Login {
            email,
            password,
            remember_me,
        } => {
            let mut form = LoginForm::new(email, password, remember_me);
            if !form.validate() {
                write_form_errors(&form, out)?;
                return Ok(Outcome::Rejected);
            }
            match kernel.login(form.params()).await {
                Ok(()) => {
                    writeln!(out, ":: Logged in as {}", form.email)?;
                    Outcome::Done
                }
                Err(rejection) => {
                    if form.apply_rejection(&rejection) {
                        write_form_errors(&form, out)?;
                    }
                    Outcome::Rejected
                }
            }
        }
        Command::Logout => match kernel.logout().await {
            Ok(()) => {
                writeln!(out, ":: Logged out")?;
                Outcome::Done
            }
            Err(_) => Outcome::Rejected,
        },
        Command::Lists => match kernel.fetch_todolists().await {
            Ok(_) => {
                let state = kernel.state();
                if state.todolists.is_empty() {
                    writeln!(out, ":: No todo-lists")?;
                }
                for l in state.todolists.iter() {
                    writeln!(out, "{}  {}", l.id(), l.list.title)?;
                }
                Outcome::Done
            }
            Err(_) => Outcome::Rejected,
        },
        Command::AddList { title } => match kernel.add_todolist(&title).await {
            Ok(list) => {
                writeln!(out, ":: Created {}  {}", list.id, list.title)?;
                Outcome::Done
            }
            Err(_) => Outcome::Rejected,
        },
        Command::RmList { id } => {
            // Loads the list first so its removal status has somewhere to live.
            if kernel.fetch_todolists().await.is_err() {
                return finish(kernel, Outcome::Rejected, out);
            }
            match kernel.remove_todolist(&id).await {
                Ok(()) => {
                    writeln!(out, ":: Removed {id}")?;
                    Outcome::Done
                }
                Err(_) => {
                    if kernel.state().todolists.get(&id).map(|l| l.entity_status)
                        == Some(EntityStatus::Failed)
                    {
                        writeln!(out, ":: {id} was not removed")?;
                    }
                    Outcome::Rejected
                }
            }
        }
        Command::RenameList { id, title } => {
            let update = UpdateTodolistTitle { id, title };
            match kernel.change_todolist_title(update).await {
                Ok(renamed) => {
                    writeln!(out, ":: Renamed {} to {}", renamed.id, renamed.title)?;
                    Outcome::Done
                }
                Err(_) => Outcome::Rejected,
            }
        }
        Command::Tasks { list_id, filter } => {
            if kernel.fetch_todolists().await.is_err() {
                return finish(kernel, Outcome::Rejected, out);
            }
            kernel.change_todolist_filter(&list_id, filter.into());
            match kernel.fetch_tasks(&list_id).await {
                Ok(_) => {
                    let state = kernel.state();
                    let visible = state.visible_tasks(&list_id);
                    if visible.is_empty() {
                        writeln!(out, ":: No tasks")?;
                    }
                    for t in visible {
                        let mark = if t.task.status.is_completed() {
                            "x"
                        } else {
                            " "
                        };
                        writeln!(out, "[{mark}] {}  {}", t.task.id, t.task.title)?;
                    }
                    Outcome::Done
                }
                Err(_) => Outcome::Rejected,
            }
        }
        Command::AddTask { list_id, title } => match kernel.add_task(&list_id, &title).await {
            Ok(task) => {
                writeln!(out, ":: Created {}  {}", task.id, task.title)?;
                Outcome::Done
            }
            Err(_) => Outcome::Rejected,
        },
        Command::RmTask { list_id, task_id } => {
            if kernel.fetch_tasks(&list_id).await.is_err() {
                return finish(kernel, Outcome::Rejected, out);
            }
            match kernel.remove_task(&list_id, &task_id).await {
                Ok(()) => {
                    writeln!(out, ":: Removed {task_id}")?;
                    Outcome::Done
                }
                Err(_) => Outcome::Rejected,
            }
        }
    };
    finish(kernel, outcome, out)
}

/// Prints and dismisses whatever the banner holds after a command.
fn finish(kernel: &HttpKernel, outcome: Outcome, out: &mut impl Write) -> Result<Outcome> {
    if let Some(error) = kernel.state().app.error {
        writeln!(out, "!! {error}")?;
        kernel.set_app_error(None);
    }
    Ok(outcome)
}

fn write_form_errors(form: &LoginForm, out: &mut impl Write) -> Result<()> {
    for (field, error) in form.errors() {
        writeln!(out, "!! {field}: {error}")?;
    }
    Ok(())
}

/// Reads commands line by line until `exit` or end of input. Every line runs
/// against the same kernel, so the session cookie carries over.
pub async fn run_shell<R>(kernel: &HttpKernel, input: R, out: &mut impl Write) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_shell_line(&line) {
            Ok(Some(ShellCommand::Exit)) => break,
            Ok(Some(ShellCommand::Op(command))) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "!! {err}")?;
                continue;
            }
        };
        execute(kernel, command, out).await?;
    }
    Ok(())
}
