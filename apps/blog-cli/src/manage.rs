//! Interactive management session over a local [`Board`].

use std::io::{BufRead, Write};

use blog_client::{BlogClient, ClientError, CreateBlogRequest, UpdateBlogRequest};

use crate::board::Board;
use crate::prompt::{ask, confirm, next_line};
use crate::view;

const HELP: &str = "\
Commands:
  list                 show the local list
  show <id>            show one blog in full
  new                  create a blog
  edit <id>            edit a blog (empty answers keep the current value)
  delete <id> [<id>..] delete one or more blogs
  clear                delete every blog
  refresh              reload the list from the server
  help                 show this help
  quit                 leave the session
";

/// One line typed at the session prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Show(i32),
    New,
    Edit(i32),
    Delete(Vec<i32>),
    Clear,
    Refresh,
    Help,
    Quit,
}

impl Action {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err("type `help` for a list of commands".to_string());
        };
        let ids = words
            .map(|w| w.parse::<i32>().map_err(|_| format!("`{w}` is not a valid id")))
            .collect::<Result<Vec<_>, _>>()?;

        let single = |ids: Vec<i32>| match ids.as_slice() {
            [id] => Ok(*id),
            _ => Err(format!("`{verb}` takes exactly one id")),
        };

        match verb {
            "list" | "ls" => Ok(Action::List),
            "show" => single(ids).map(Action::Show),
            "new" | "create" => Ok(Action::New),
            "edit" => single(ids).map(Action::Edit),
            "delete" | "rm" if !ids.is_empty() => Ok(Action::Delete(ids)),
            "delete" | "rm" => Err("`delete` needs at least one id".to_string()),
            "clear" => Ok(Action::Clear),
            "refresh" => Ok(Action::Refresh),
            "help" | "?" => Ok(Action::Help),
            "quit" | "exit" | "q" => Ok(Action::Quit),
            other => Err(format!("unknown command `{other}`")),
        }
    }
}

/// A management session. Mutations go to the server first; the local board is
/// only patched once the server accepted them.
pub struct Session<R, W> {
    client: BlogClient,
    board: Board,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Fetch the list once and start from it.
    pub async fn start(client: BlogClient, input: R, output: W) -> Result<Self, anyhow::Error> {
        let list = client.list().await?;
        Ok(Self {
            client,
            board: Board::new(list.data),
            input,
            output,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the session, handing back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and execute commands until `quit` or end of input.
    pub async fn run(&mut self) -> Result<(), anyhow::Error> {
        write!(self.output, "{}", view::render_list(self.board.posts()))?;

        loop {
            write!(self.output, "blog> ")?;
            self.output.flush()?;

            let Some(line) = next_line(&mut self.input)? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match Action::parse(&line) {
                Ok(Action::Quit) => break,
                Ok(action) => self.execute(action).await?,
                Err(msg) => writeln!(self.output, "{msg}")?,
            }
        }

        Ok(())
    }

    pub async fn execute(&mut self, action: Action) -> Result<(), anyhow::Error> {
        match action {
            Action::List => {
                write!(self.output, "{}", view::render_list(self.board.posts()))?;
            }
            Action::Show(id) => match self.board.get(id) {
                Some(post) => write!(self.output, "{}", view::render_detail(post))?,
                None => write!(self.output, "{}", view::render_not_found(id))?,
            },
            Action::New => self.create().await?,
            Action::Edit(id) => self.edit(id).await?,
            Action::Delete(ids) => self.delete(ids).await?,
            Action::Clear => self.clear().await?,
            Action::Refresh => match self.client.list().await {
                Ok(list) => {
                    self.board.replace(list.data);
                    write!(self.output, "{}", view::render_list(self.board.posts()))?;
                }
                Err(e) => self.report("Failed to load blogs", &e)?,
            },
            Action::Help => write!(self.output, "{HELP}")?,
            Action::Quit => {}
        }
        Ok(())
    }

    async fn create(&mut self) -> Result<(), anyhow::Error> {
        let title = ask(&mut self.input, &mut self.output, "Title")?;
        let content = ask(&mut self.input, &mut self.output, "Content")?;

        match self
            .client
            .create(&CreateBlogRequest { title, content })
            .await
        {
            Ok(res) => {
                writeln!(self.output, "Blog added successfully! (id {})", res.data.id)?;
                self.board.apply_created(res.data);
            }
            Err(e) => self.report("Failed to add blog", &e)?,
        }
        Ok(())
    }

    async fn edit(&mut self, id: i32) -> Result<(), anyhow::Error> {
        let Some(current) = self.board.get(id).cloned() else {
            write!(self.output, "{}", view::render_not_found(id))?;
            return Ok(());
        };

        let title = ask(
            &mut self.input,
            &mut self.output,
            &format!("Title [{}]", current.title),
        )?;
        let content = ask(&mut self.input, &mut self.output, "Content [keep]")?;
        let payload = UpdateBlogRequest {
            title: Some(title).filter(|t| !t.is_empty()),
            content: Some(content).filter(|c| !c.is_empty()),
        };

        match self.client.update(id, &payload).await {
            Ok(res) => {
                writeln!(self.output, "Blog updated successfully!")?;
                self.board.apply_updated(res.data);
            }
            Err(e) => self.report("Failed to update blog", &e)?,
        }
        Ok(())
    }

    async fn delete(&mut self, ids: Vec<i32>) -> Result<(), anyhow::Error> {
        let question = match ids.as_slice() {
            [_] => "Are you sure you want to delete this blog?".to_string(),
            many => format!("Are you sure you want to delete {} blogs?", many.len()),
        };
        if !confirm(&mut self.input, &mut self.output, &question, false)? {
            writeln!(self.output, "Cancelled.")?;
            return Ok(());
        }

        // One request per id; a failure does not stop the rest.
        for id in ids {
            match self.client.delete(id).await {
                Ok(_) => {
                    writeln!(self.output, "Deleted blog {id}.")?;
                    self.board.apply_deleted(id);
                }
                Err(e) => self.report(&format!("Failed to delete blog {id}"), &e)?,
            }
        }
        Ok(())
    }

    async fn clear(&mut self) -> Result<(), anyhow::Error> {
        if !confirm(
            &mut self.input,
            &mut self.output,
            "Are you sure you want to delete ALL blogs?",
            false,
        )? {
            writeln!(self.output, "Cancelled.")?;
            return Ok(());
        }

        match self.client.delete_all().await {
            Ok(res) => {
                writeln!(self.output, "All blogs deleted ({}).", res.count)?;
                self.board.apply_cleared();
            }
            Err(e) => self.report("Failed to delete all blogs", &e)?,
        }
        Ok(())
    }

    fn report(&mut self, message: &str, err: &ClientError) -> Result<(), anyhow::Error> {
        tracing::error!(error = %err, "{message}");
        writeln!(self.output, "{message}.")?;
        Ok(())
    }
}
