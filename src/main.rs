use clap::Parser;
use std::path::PathBuf;

use newsgen::Renderer;
use newsgen::illustrations;

#[derive(Parser)]
#[command(name = "newsgen")]
#[command(about = "Generate the placeholder illustrations for the news section")]
struct Cli {
    /// Directory the JPEG files are written to
    #[arg(long, value_name = "DIR", default_value = "public/images/news")]
    output_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    println!("Starting image generation...");

    let renderer = Renderer::new(args.output_dir).with_verbose(args.verbose);
    renderer.generate_all(&illustrations::all())?;

    println!("All images generated successfully!");
    Ok(())
}
