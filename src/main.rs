mod cli;

use clap::Parser;
use color_eyre::Result;

use cb9_style::{logging, Config, Error, Styler, Theme};

use crate::cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Load configuration
    let config = Config::load()?;

    let styler = Styler::new();
    styler.configure(&config);

    // Flags take precedence over config
    if let Some(mode) = cli.color {
        styler.gate().apply_mode(mode);
    }
    if let Some(name) = cli.theme.as_deref() {
        let mut theme = Theme::preset(name).ok_or_else(|| Error::UnknownTheme(name.to_string()))?;
        config.colors.apply_to(&mut theme);
        styler.apply_theme(theme);
    }

    let output = cli::run(cli.command, &styler, &config)?;
    println!("{output}");

    Ok(())
}
