use std::io;

use spdlog::{debug, info};

use crate::config::Config;
use crate::post_list::{load_posts, PostSet};
use crate::report::Report;
use crate::validation::fields::validate_fields;
use crate::validation::links::validate_links;
use crate::validation::Finding;

pub struct CheckOutcome {
    pub posts: PostSet,
    pub report: Report,
}

/// load -> field checks -> link checks. Only I/O problems with the content tree are errors here.
pub fn run_check(config: &Config) -> io::Result<CheckOutcome> {
    let content_dir = &config.paths.content_dir;
    info!("Checking posts in {}", content_dir.display());

    let posts = load_posts(content_dir, &config.defaults.extension)?;

    let mut findings: Vec<Finding> = posts.unreadable().iter()
        .map(|f| Finding::error(&f.file_path, format!("Could not read file: {}", f.error)))
        .collect();

    findings.extend(validate_fields(posts.posts(), &config.defaults.author));
    findings.extend(validate_links(&posts));

    for finding in &findings {
        debug!("{}", finding);
    }
    info!("Check finished with {} finding(s)", findings.len());

    Ok(CheckOutcome {
        posts,
        report: Report::new(findings),
    })
}
