use careconnect_site::{catalog, config, generate, nav, output, tips};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "careconnect-site")]
#[command(about = "Static fragment generator for the CareConnect web shell")]
#[command(long_about = "\
Static fragment generator for the CareConnect web shell

The site's fixed presentational data — footer navigation, dashboard
side-panel images, health tips — lives in this binary. `render` writes
self-contained HTML fragments the host application includes verbatim:

  dist/
  ├── footer.html       # Site footer (brand, link columns, copyright)
  ├── side-panel.html   # Dashboard side-panel image cards
  ├── health-tips.html  # Dashboard health tips list
  ├── side-images.json  # Image catalog manifest
  └── index.html        # Preview page embedding every fragment

Colors and spacing come from an optional config.toml in --config-dir.
Run 'careconnect-site gen-config' for a documented stock config.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Output directory for generated fragments
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the static data and write all fragments
    Render,
    /// Validate the static data and print the content inventory
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render => {
            check_static_data()?;
            let config = config::load_config(&cli.config_dir)?;
            let summary = generate::generate(&cli.output, &config)?;
            output::print_generate_output(&summary);
            println!("Fragments written to {}", cli.output.display());
        }
        Command::Check => {
            check_static_data()?;
            output::print_check_output();
            println!();
            println!("Static data is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Run every compiled-in data table through its validator.
fn check_static_data() -> Result<(), Box<dyn std::error::Error>> {
    catalog::check()?;
    nav::check()?;
    tips::check()?;
    Ok(())
}
