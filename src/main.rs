use std::{io::read_to_string, path::PathBuf};

use anyhow::{Context, Result};
use clap::*;
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use workshop_client::{types::*, Client, ClientConfig, Session};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Paging {
    /// Page index, starting at 0
    #[arg(long, default_value_t = 0)]
    page: u32,
    /// Page size
    #[arg(long, default_value_t = PageRequest::MAX_LIMIT)]
    limit: u32,
}

impl From<&Paging> for PageRequest {
    fn from(p: &Paging) -> Self {
        PageRequest::new(p.page, p.limit)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and remember the token; the password is read from stdin
    Login { username: String },
    /// Forget the stored token
    Logout {},
    /// Show the signed-in user
    Whoami {},
    /// Check the backend is up
    Health {
        /// Include per-component checks
        #[arg(long)]
        detailed: bool,
    },
    /// List installed models
    Models {},
    /// List prompts
    Prompts {
        #[command(flatten)]
        paging: Paging,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        tag: Option<String>,
    },
    /// List tools
    Tools {
        #[command(flatten)]
        paging: Paging,
        #[arg(long)]
        language: Option<String>,
    },
    /// List documents
    Documents {
        #[command(flatten)]
        paging: Paging,
        #[arg(long)]
        file_type: Option<String>,
    },
    /// Upload a file as a document
    Upload {
        path: PathBuf,
        #[arg(long)]
        title: String,
    },
    /// List vector databases
    VectorDbs {
        #[command(flatten)]
        paging: Paging,
        #[arg(long)]
        db_type: Option<String>,
    },
    /// Query an embedding job once
    EmbeddingTask { task_id: String },
    /// Ask a RAG system a question
    RagTest { id: String, text: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if dotenv::dotenv().is_err() {
        warn!("didn't load a .env file")
    }

    let args = Cli::parse();

    let config = ClientConfig::from_env().context("failed to load configuration")?;
    let client = Client::new(&config).context("failed to create client")?;
    let mut session = Session::from_config(&config)
        .await
        .context("failed to restore session")?;

    match args.command {
        Commands::Login { username } => {
            println!("Enter password:");
            let password = read_to_string(std::io::stdin())?;
            let credentials = Credentials::new(username, password.trim_end());

            let user = client.login(&mut session, &credentials).await?;
            print_json(&user)?;
        }
        Commands::Logout {} => client.logout(&mut session).await,
        Commands::Whoami {} => print_json(&client.current_user(&session).await?)?,
        Commands::Health { detailed: false } => print_json(&client.health(&session).await?)?,
        Commands::Health { detailed: true } => {
            let (basic, detailed) = futures::try_join!(
                client.health(&session),
                client.health_detailed(&session)
            )?;
            print_json(&basic)?;
            print_json(&detailed)?;
        }
        Commands::Models {} => print_json(&client.list_models(&session).await?)?,
        Commands::Prompts {
            paging,
            category,
            tag,
        } => {
            let filter = PromptFilter { category, tag };
            print_json(&client.list_prompts(&session, (&paging).into(), &filter).await?)?
        }
        Commands::Tools { paging, language } => {
            let filter = ToolFilter { language };
            print_json(&client.list_tools(&session, (&paging).into(), &filter).await?)?
        }
        Commands::Documents { paging, file_type } => {
            let filter = DocumentFilter { file_type };
            print_json(&client.list_documents(&session, (&paging).into(), &filter).await?)?
        }
        Commands::Upload { path, title } => {
            print_json(&client.upload_document_file(&session, &path, &title).await?)?
        }
        Commands::VectorDbs { paging, db_type } => {
            let filter = VectorDbFilter { db_type };
            print_json(&client.list_vector_dbs(&session, (&paging).into(), &filter).await?)?
        }
        Commands::EmbeddingTask { task_id } => {
            print_json(&client.embedding_task(&session, &task_id).await?)?
        }
        Commands::RagTest { id, text } => {
            print_json(&client.test_rag_system(&session, &id, &text).await?)?
        }
    }

    Ok(())
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
