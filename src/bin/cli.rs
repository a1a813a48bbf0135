//! booklist CLI
//!
//! Command-line interface for managing a catalog file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, EnvFilter};

use booklist::{
    Book, BookError, BookFormatter, Catalog, Config, FileStorage, LimitedEditionFormatter,
    SortKey, StandardFormatter,
};

/// booklist CLI
#[derive(Parser, Debug)]
#[command(name = "booklist")]
#[command(about = "Personal-library catalog stored in a flat file")]
#[command(version)]
struct Args {
    /// Catalog file (falls back to $BOOKLIST_PATH, then Book.txt)
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Fields identifying one book
#[derive(clap::Args, Debug)]
struct BookArgs {
    isbn: String,
    author: String,
    title: String,
    publisher: String,
    year: u32,
    pages: u32,
    price: Decimal,
}

impl BookArgs {
    fn into_book(self) -> booklist::Result<Book> {
        Book::new(
            self.isbn,
            self.author,
            self.title,
            self.publisher,
            self.year,
            self.pages,
            self.price,
        )
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every book in catalog order
    List {
        /// Format code: G (full), S (short), I (ISBN), L (limited edition)
        #[arg(long, default_value = "G")]
        format: String,
    },

    /// Add a book
    Add(BookArgs),

    /// Remove a book (all fields must match)
    Remove(BookArgs),

    /// Sort the catalog by one field
    Sort {
        /// isbn, author, title, publisher, year, pages or price
        #[arg(long)]
        by: SortKey,

        /// Write the new order back to the file
        #[arg(long)]
        persist: bool,
    },

    /// Find a book by tag (not supported)
    FindByTag,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,booklist=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> booklist::Result<()> {
    let config = match args.file {
        Some(path) => Config::builder().path(path).build(),
        None => Config::from_env()?,
    };
    tracing::debug!("Catalog file: {}", config.path.display());

    let mut catalog = Catalog::open(FileStorage::from_config(&config))?;

    match args.command {
        Commands::List { format } => {
            let formatter: &dyn BookFormatter = if format == "L" {
                &LimitedEditionFormatter
            } else {
                &StandardFormatter
            };
            for book in &catalog {
                println!("{}", formatter.format(&format, book)?);
            }
        }
        Commands::Add(fields) => {
            let book = fields.into_book()?;
            if !book.is_encodable() {
                tracing::warn!("Fields containing '/' will not survive a reload");
            }
            if catalog.add(book)? {
                tracing::info!("Added, catalog now holds {} books", catalog.len());
            } else {
                println!("Book already in catalog");
            }
        }
        Commands::Remove(fields) => {
            let book = fields.into_book()?;
            if catalog.remove(&book)? {
                tracing::info!("Removed, catalog now holds {} books", catalog.len());
            } else {
                println!("Book not in catalog");
            }
        }
        Commands::Sort { by, persist } => {
            catalog.sort_with(&by)?;
            if persist {
                catalog.persist()?;
            }
            for book in &catalog {
                println!("{}", book);
            }
        }
        Commands::FindByTag => match catalog.find_by_tag() {
            Ok(book) => println!("{}", book),
            Err(e @ BookError::Unsupported(_)) => println!("{}", e),
            Err(e) => return Err(e),
        },
    }

    Ok(())
}
