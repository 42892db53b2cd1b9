use std::sync::Arc;
use std::time::Instant;

use academy::logging::{FormatElapsedTimeOptions, format_elapsed_time, log_problems, print_title};
use academy::validate::check_site;
use academy::{Site, SiteConfig, is_dev};
use log::{Level, info};
use maudit::{BuildOutput, content_sources, coronate, routes};

mod content;
mod layout;
mod routes;
mod theme;

use routes::*;

const CONFIG_FILE: &str = "academy.yaml";

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    let config = SiteConfig::load(CONFIG_FILE)?.with_env_overrides()?;
    let site = Arc::new(Site::new(&config, content::registry(), theme::theme()));

    let output = coronate(
        routes![
            Index {
                site: Arc::clone(&site)
            },
            ResponsibleAiCourse {
                site: Arc::clone(&site)
            },
            ChatRedirect {
                site: Arc::clone(&site)
            },
            NotFound {
                site: Arc::clone(&site)
            }
        ],
        content_sources![],
        config.build_options(),
    )?;

    print_title("checking content");
    let checks_start = Instant::now();
    let pages = output.pages.iter().map(|page| page.route.as_str());

    match check_site(&site, &config.static_dir, pages) {
        Ok(()) => {
            info!(target: "validate", "Content checked in {}", format_elapsed_time(checks_start.elapsed(), &FormatElapsedTimeOptions::default()));
        }
        Err(problems) if is_dev() => log_problems(&problems, Level::Warn),
        Err(problems) => {
            log_problems(&problems, Level::Error);
            return Err(problems.into());
        }
    }

    Ok(output)
}
