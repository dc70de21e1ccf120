use clap::{ArgAction, Parser};
use overscribe::Config;

#[derive(Parser, Debug)]
#[command(name = "overscribe")]
#[command(
    version,
    about = "Stroke engine for transparent screen annotation overlays"
)]
struct Cli {
    /// Validate the configuration file and print the resolved settings
    #[arg(long, action = ArgAction::SetTrue)]
    check_config: bool,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    if cli.check_config {
        let config = Config::load()?;
        println!("Configuration OK");
        println!("  default color:    {}", config.default_color().name());
        println!("  default width:    {}px", config.default_width().px());
        println!(
            "  cursor indicator: {}",
            if config.ui.show_cursor_indicator {
                "shown"
            } else {
                "hidden"
            }
        );
        return Ok(());
    }

    // No flags: show usage
    println!(
        "overscribe {} ({}): stroke engine for screen annotation overlays",
        env!("CARGO_PKG_VERSION"),
        env!("OVERSCRIBE_GIT_HASH")
    );
    println!();
    println!("This binary manages configuration; the overlay itself is embedded");
    println!("and presented by a platform shell.");
    println!();
    println!("Usage:");
    println!("  overscribe --check-config   Validate the config file and print resolved settings");
    println!("  overscribe --init-config    Write a documented default config file");
    println!("  overscribe --help           Show help");
    println!();
    println!("Controls (fixed, while a shell presents the overlay):");
    println!("  - Draw: drag the pointer");
    println!("  - Straight line: hold Shift + drag");
    println!("  - Undo: Ctrl+Z");
    println!("  - Clear all: Escape");
    println!("  - Thinner pen: W");
    println!("  - Thicker pen: E");
    println!("  - Next color: R (red -> blue -> green -> black)");

    Ok(())
}
