use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use blog_cli::command::{Cli, Command};
use blog_cli::manage::Session;
use blog_cli::prompt::confirm;
use blog_cli::view;
use blog_client::{BlogClient, CreateBlogRequest, UpdateBlogRequest};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = BlogClient::new(&cli.base_url);

    match run(client, cli.command).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = ?e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(client: BlogClient, command: Command) -> Result<ExitCode, anyhow::Error> {
    let mut stdout = io::stdout().lock();

    match command {
        Command::List => {
            let list = client.list().await.context("Failed to load blogs")?;
            write!(stdout, "{}", view::render_list(&list.data))?;
            write!(stdout, "{}", view::render_summary(list.count, list.updated_at))?;
        }
        Command::Show { id } => match client.get(id).await {
            Ok(res) => write!(stdout, "{}", view::render_detail(&res.data))?,
            Err(e) if e.is_not_found() => {
                write!(stdout, "{}", view::render_not_found(id))?;
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => return Err(e).context("Failed to load blog"),
        },
        Command::Create { title, content } => {
            let res = client
                .create(&CreateBlogRequest { title, content })
                .await
                .context("Failed to add blog")?;
            writeln!(stdout, "Blog added successfully!\n")?;
            write!(stdout, "{}", view::render_detail(&res.data))?;
        }
        Command::Edit { id, title, content } => {
            let res = client
                .update(id, &UpdateBlogRequest { title, content })
                .await
                .context("Failed to update blog")?;
            writeln!(stdout, "Blog updated successfully!\n")?;
            write!(stdout, "{}", view::render_detail(&res.data))?;
        }
        Command::Delete { ids, yes } => {
            let question = match ids.as_slice() {
                [_] => "Are you sure you want to delete this blog?".to_string(),
                many => format!("Are you sure you want to delete {} blogs?", many.len()),
            };
            if !yes && !confirm(&mut io::stdin().lock(), &mut stdout, &question, false)? {
                writeln!(stdout, "Cancelled.")?;
                return Ok(ExitCode::SUCCESS);
            }

            let mut failed = false;
            for id in ids {
                match client.delete(id).await {
                    Ok(_) => writeln!(stdout, "Deleted blog {id}.")?,
                    Err(e) => {
                        tracing::error!(error = %e, blog_id = id, "Delete failed");
                        writeln!(stdout, "Failed to delete blog {id}.")?;
                        failed = true;
                    }
                }
            }
            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::DeleteAll { yes } => {
            let question = "Are you sure you want to delete ALL blogs?";
            if !yes && !confirm(&mut io::stdin().lock(), &mut stdout, question, false)? {
                writeln!(stdout, "Cancelled.")?;
                return Ok(ExitCode::SUCCESS);
            }

            let res = client
                .delete_all()
                .await
                .context("Failed to delete all blogs")?;
            writeln!(stdout, "All blogs deleted ({}).", res.count)?;
        }
        Command::Manage => {
            drop(stdout);
            let mut session = Session::start(client, io::stdin().lock(), io::stdout())
                .await
                .context("Failed to load blogs")?;
            session.run().await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
