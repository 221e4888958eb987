use crate::config::BlogSettings;
use crate::query::SortOrder;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mindstream")]
#[command(
    author,
    version,
    about = "A local-first, AI-assisted blog you write from the terminal"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "MINDSTREAM_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new blog in the current directory
    Init {
        /// Author name stamped on new posts
        #[arg(long, default_value_t = BlogSettings::default().author)]
        author: String,
    },

    /// Write a new post
    #[command(visible_alias = "create")]
    New {
        /// Title of the post
        title: String,

        /// Markdown content (use '-' to read from stdin)
        #[arg(short = 'd', long = "body")]
        body: Option<String>,

        /// Read markdown content from file
        #[arg(long)]
        body_file: Option<String>,

        /// Short summary (defaults to the start of the content)
        #[arg(long)]
        excerpt: Option<String>,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,

        /// Cover image URL or data URL
        #[arg(long)]
        cover: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an existing post
    #[command(visible_alias = "update")]
    Edit {
        /// Post ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New markdown content (use '-' to read from stdin)
        #[arg(short = 'd', long = "body")]
        body: Option<String>,

        /// Read new markdown content from file
        #[arg(long)]
        body_file: Option<String>,

        /// New excerpt (empty to derive from content)
        #[arg(long)]
        excerpt: Option<String>,

        /// Tags to add
        #[arg(long)]
        add_tag: Vec<String>,

        /// Tags to remove
        #[arg(long)]
        remove_tag: Vec<String>,

        /// New cover image (empty to remove)
        #[arg(long)]
        cover: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List posts
    #[command(visible_alias = "ls")]
    List {
        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Order by creation date
        #[arg(short, long, value_enum, default_value = "newest")]
        sort: SortArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read a post with its comments
    Show {
        /// Post ID
        id: String,

        /// Output as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Output the content as an HTML fragment
        #[arg(long)]
        html: bool,
    },

    /// Delete a post permanently
    #[command(visible_alias = "rm")]
    Delete {
        /// Post ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Comment on a post
    Comment {
        /// Post ID
        id: String,

        /// Comment text
        content: String,

        /// Your name
        #[arg(short, long)]
        author: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all tags in use
    Tags {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search posts (supports field:, regex: prefixes)
    Search {
        /// Search query
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render markdown from a file or stdin
    Render {
        /// Markdown file ('-' or omitted for stdin)
        file: Option<String>,

        /// Output an HTML fragment instead of terminal text
        #[arg(long)]
        html: bool,
    },

    /// Embed an image file into a post's content
    Attach {
        /// Post ID
        id: String,

        /// Image file to embed
        image: PathBuf,

        /// Character position to insert at (appends by default)
        #[arg(long)]
        at: Option<usize>,

        /// Use the image as the cover instead of inlining it
        #[arg(long)]
        cover: bool,
    },

    /// Export all posts as JSON
    Export {
        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import posts from a JSON export
    Import {
        /// Export file
        file: PathBuf,
    },

    /// Writing assistant
    Ai {
        #[command(subcommand)]
        action: AiAction,
    },
}

#[derive(Subcommand)]
pub enum AiAction {
    /// Draft a post about a topic, or refine an existing post
    Draft {
        /// Topic to write about (defaults to the post's title)
        #[arg(long)]
        topic: Option<String>,

        /// Refine the content of this post
        #[arg(long)]
        post: Option<String>,

        /// Save the result instead of printing it
        #[arg(long)]
        save: bool,
    },

    /// Suggest topic ideas
    Ideas {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate and save cover art for a post
    Cover {
        /// Post ID
        id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Newest,
    Oldest,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortOrder::Newest,
            SortArg::Oldest => SortOrder::Oldest,
        }
    }
}
