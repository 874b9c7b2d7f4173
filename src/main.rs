//! phpdocs-md: render markdown API documentation from PHP class
//! descriptors.
//!
//! ```text
//! phpdocs-md classes.json                      # every class, markdown
//! phpdocs-md classes.json -c 'Acme\Foo' --see  # one class, with @see
//! phpdocs-md a.json b.json --format json       # the model as JSON
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use phpdocs_md::{
    Config, DescriptorIndex, Documenter, OutputFormat, VisibilityFilter, render_class,
};

#[derive(Parser)]
#[command(
    name = "phpdocs-md",
    version,
    about = "Generate markdown documentation from PHP class descriptors"
)]
struct Cli {
    /// Class descriptor JSON files.
    #[arg(required = true)]
    descriptors: Vec<PathBuf>,

    /// Fully-qualified class to document.  Repeatable.  Without it every
    /// non-built-in class in the descriptor files is documented.
    #[arg(short, long = "class")]
    class: Vec<String>,

    /// Only keep methods matching one of these (public, protected,
    /// abstract, final).
    #[arg(long, value_delimiter = ',')]
    visibility: Vec<VisibilityFilter>,

    /// Only keep methods whose name matches this regular expression.
    #[arg(long)]
    method_pattern: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Include @see references in the function table.
    #[arg(long)]
    see: bool,

    /// Do not append @example blocks below the function table.
    #[arg(long)]
    no_examples: bool,

    /// Configuration file (default: ./phpdocs-md.toml, then the user
    /// configuration directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log resolution steps to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Command-line flags win over the configuration file.
    fn apply_to(&self, config: &mut Config) {
        if !self.visibility.is_empty() {
            config.visibility = self.visibility.clone();
        }
        if let Some(pattern) = &self.method_pattern {
            config.method_pattern = Some(pattern.clone());
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.see {
            config.include_see = true;
        }
        if self.no_examples {
            config.append_examples = false;
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("phpdocs_md=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply_to(&mut config);

    let mut index = DescriptorIndex::with_builtins();
    for path in &cli.descriptors {
        index
            .load_file(path)
            .with_context(|| format!("failed to load descriptors from {}", path.display()))?;
    }

    let names = if cli.class.is_empty() {
        index.documentable_classes()
    } else {
        cli.class.clone()
    };

    let options = config
        .document_options()
        .context("invalid method filter")?;
    let documenter = Documenter::with_options(&index, options);

    let mut classes = Vec::with_capacity(names.len());
    for name in &names {
        let class = documenter
            .document(name)
            .with_context(|| format!("failed to document {}", name))?;
        if class.has_ignore_tag() {
            debug!(class = %name, "skipping class tagged @ignore");
            continue;
        }
        classes.push(class);
    }

    match config.format {
        OutputFormat::Markdown => {
            let render_options = config.render_options();
            let documents: Vec<String> = classes
                .iter()
                .map(|class| render_class(class, &render_options))
                .collect();
            print!("{}", documents.join("\n<hr />\n\n"));
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&classes).context("failed to serialize classes")?;
            println!("{}", json);
        }
    }

    Ok(())
}
