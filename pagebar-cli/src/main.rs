use clap::{Parser, Subcommand, ValueEnum};
use pagebar_core::{
    HtmlBackend, Pagination, PaginationOptions, Selection, TextBackend, dispatch, total_pages,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagebar-cli")]
#[command(about = "Compute and render pagination controls")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct PositionArgs {
    /// Total number of items
    #[arg(long)]
    total: usize,
    /// Zero-based current page
    #[arg(long, default_value = "0")]
    current: usize,
    /// Items per page (overrides the options file)
    #[arg(long)]
    page_size: Option<usize>,
    /// Pages shown before ellipsis truncation kicks in (overrides the options file)
    #[arg(long)]
    max_visible: Option<usize>,
    /// Options file (JSON); defaults to options.json in the user config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

impl PositionArgs {
    fn options(&self) -> Result<PaginationOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => PaginationOptions::load(path)?,
            None => PaginationOptions::load_or_default()?,
        };
        if let Some(page_size) = self.page_size {
            options.page_size = page_size;
        }
        if let Some(max_visible) = self.max_visible {
            options.max_visible_pages = max_visible;
        }
        options.validate()?;
        Ok(options)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the page tokens the control would show
    Tokens {
        #[command(flatten)]
        position: PositionArgs,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the whole control
    Render {
        #[command(flatten)]
        position: PositionArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// Simulate a click and print the resulting page change
    Select {
        #[command(flatten)]
        position: PositionArgs,
        #[command(subcommand)]
        target: Target,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum Target {
    /// The previous-page button
    Prev,
    /// The next-page button
    Next,
    /// A page button
    Page {
        /// Zero-based page index
        page: usize,
    },
}

impl From<Target> for Selection {
    fn from(target: Target) -> Self {
        match target {
            Target::Prev => Selection::Prev,
            Target::Next => Selection::Next,
            Target::Page { page } => Selection::Page(page),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tokens { position, json } => {
            let pagination: Pagination<'_, (), String> = Pagination::new(position.total, |_| ())
                .current_page(position.current)
                .options(position.options()?);
            let tokens = pagination.tokens();
            if json {
                println!("{}", serde_json::to_string(&tokens)?);
            } else {
                let rendered: Vec<String> = tokens
                    .iter()
                    .map(|token| match token.page() {
                        Some(page) => page.to_string(),
                        None => format!("\"{}\"", token),
                    })
                    .collect();
                println!("[{}]", rendered.join(", "));
            }
        }
        Commands::Render { position, format } => {
            let options = position.options()?;
            log::debug!(
                "rendering page {} of {} items with {:?}",
                position.current,
                position.total,
                options
            );
            let pagination = Pagination::new(position.total, |_| ())
                .current_page(position.current)
                .options(options);

            let output = match format {
                Format::Text => pagination.render(&TextBackend),
                Format::Html => pagination.render(&HtmlBackend),
                Format::Json => {
                    let controls = pagination.controls();
                    if controls.is_empty() {
                        None
                    } else {
                        Some(serde_json::to_string_pretty(&controls)?)
                    }
                }
            };

            // A single page renders nothing
            if let Some(output) = output {
                println!("{}", output);
            }
        }
        Commands::Select { position, target } => {
            let options = position.options()?;
            let pages = total_pages(position.total, options.page_size);
            let changed = dispatch(position.current, pages, target.into(), |page| {
                println!("onChange({})", page);
            });
            if changed.is_none() {
                println!("no change");
            }
        }
    }

    Ok(())
}
