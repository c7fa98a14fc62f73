use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::ui::page::Page;

#[derive(Debug, Parser)]
#[command(name = "showreel", version, about = "Agency showcase in your terminal")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Page to open first
    #[arg(long, value_enum, default_value_t = Page::Home)]
    pub page: Page,

    /// Start every carousel with auto-advance off
    #[arg(long)]
    pub no_autoplay: bool,

    /// Load and validate the config, then exit
    #[arg(long)]
    pub check_config: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Fold command-line overrides into the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if self.no_autoplay {
            config.rotation.hero.autoplay = false;
            config.rotation.testimonials.autoplay = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_home_with_autoplay() {
        let cli = Cli::parse_from(["showreel"]);
        assert_eq!(cli.page, Page::Home);
        assert!(!cli.no_autoplay);
        assert!(!cli.check_config);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_page_and_overrides() {
        let cli = Cli::parse_from([
            "showreel",
            "--page",
            "contact",
            "--no-autoplay",
            "--config",
            "/tmp/showreel.toml",
        ]);
        assert_eq!(cli.page, Page::Contact);
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/showreel.toml"));

        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(!config.rotation.hero.autoplay);
        assert!(!config.rotation.testimonials.autoplay);
    }
}
