use clap::{Parser, Subcommand};
use flixdoc::analytics::{Analytics, NoopAnalytics, PageviewLog};
use flixdoc::{config, output, pages, render};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flixdoc")]
#[command(about = "Documentation site generator for the Flix reference manual")]
#[command(long_about = "\
Documentation site generator for the Flix reference manual

The manual's pages are compiled into the binary as static content trees;
building renders them to plain HTML with inline CSS. No JavaScript runtime
is required on the published site (interactive editors are attached by the
hosting page, keyed on data-flix-editor markers).

Output structure:

  dist/
  ├── index.html           # Contents page
  ├── references.html
  └── syntax.html

Each build activates every page once: the page's fixed title becomes the
document <title>, and — when enabled in config.toml — a pageview event is
appended to a local JSONL log.

Run 'flixdoc gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Site config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the manual to a static HTML site
    Build,
    /// Validate the page set without building
    Check {
        /// Emit the page inventory as JSON instead of validating output
        #[arg(long)]
        json: bool,
    },
    /// Show the manual's page and section inventory
    List,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let pages = pages::all();

    match cli.command {
        Command::Build => {
            let site = config::load_config(&cli.config)?;
            let mut analytics: Box<dyn Analytics> = if site.analytics.enabled {
                Box::new(PageviewLog::new(&site.analytics.log_path))
            } else {
                Box::new(NoopAnalytics)
            };
            println!("==> Building {} → {}", site.site_name, cli.output.display());
            let generated = render::generate(&pages, &site, &cli.output, analytics.as_mut())?;
            output::print_build_output(&generated);
            println!("==> Site generated at {}", cli.output.display());
        }
        Command::Check { json } => {
            pages::validate(&pages)?;
            if json {
                let inventory: Vec<_> = pages
                    .iter()
                    .map(|p| {
                        serde_json::json!({
                            "title": p.title,
                            "slug": p.slug,
                            "link_title": p.link_title,
                            "content": p.render(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&inventory)?);
            } else {
                output::print_list_output(&pages);
                println!("==> {} pages are valid", pages.len());
            }
        }
        Command::List => {
            output::print_list_output(&pages);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
