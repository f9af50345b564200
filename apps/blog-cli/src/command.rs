use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the blog API.
    #[clap(long, env = "BLOG_API_BASE_URL", default_value = blog_client::BlogClient::DEFAULT_BASE_URL)]
    pub base_url: String,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show every blog.
    List,
    /// Show a single blog in full.
    Show { id: i32 },
    /// Publish a new blog.
    Create {
        #[clap(short, long)]
        title: String,
        #[clap(short, long)]
        content: String,
    },
    /// Change the title and/or content of a blog.
    Edit {
        id: i32,
        #[clap(short, long)]
        title: Option<String>,
        #[clap(short, long)]
        content: Option<String>,
    },
    /// Delete one or more blogs.
    Delete {
        #[clap(required = true)]
        ids: Vec<i32>,
        /// Skip the confirmation prompt.
        #[clap(short, long)]
        yes: bool,
    },
    /// Delete every blog.
    DeleteAll {
        /// Skip the confirmation prompt.
        #[clap(short, long)]
        yes: bool,
    },
    /// Interactive management session.
    Manage,
}
