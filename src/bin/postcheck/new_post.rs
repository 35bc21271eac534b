use std::fmt::Write as _;
use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use spdlog::info;

use postcheck::config::Config;
use postcheck::post::Language;
use postcheck::text_utils::slugify;
use postcheck::util::os_helper::current_user_name;

use crate::{NewArgs, PostOutput};

struct NewPost {
    language: Language,
    slug: String,
    content: String,
}

fn get_author(args: &NewArgs) -> String {
    if let Some(ref name) = args.author {
        return name.clone();
    }

    current_user_name()
}

fn render_post(title: &str, related_slug: &str, author: &str, date: &str) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "title: \"{}\"", title);
    let _ = writeln!(&mut buf, "description: \"TODO\"");
    let _ = writeln!(&mut buf, "pubDate: {}", date);
    let _ = writeln!(&mut buf, "relatedSlug: {}", related_slug);
    let _ = writeln!(&mut buf, "draft: true");
    let _ = writeln!(&mut buf, "tags: []");
    let _ = writeln!(&mut buf, "author: \"{}\"", author);
    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf);
    let _ = writeln!(&mut buf, "# {}", title);
    let _ = writeln!(&mut buf);
    let _ = writeln!(&mut buf, "Write your post here");
    buf
}

/// Both posts of a translation pair, each one pointing to the other
fn build_pair(title_es: &str, title_en: &str, author: &str, date: &str) -> Result<[NewPost; 2]> {
    let slug_es = slugify(title_es);
    let mut slug_en = slugify(title_en);

    if slug_es.is_empty() || slug_en.is_empty() {
        bail!("Titles must contain at least one letter or digit");
    }

    // A post may not link to its own slug
    if slug_es == slug_en {
        slug_en.push_str("-en");
    }

    Ok([
        NewPost {
            language: Language::Es,
            content: render_post(title_es, &slug_en, author, date),
            slug: slug_es.clone(),
        },
        NewPost {
            language: Language::En,
            content: render_post(title_en, &slug_es, author, date),
            slug: slug_en,
        },
    ])
}

fn post_path(content_dir: &Path, extension: &str, post: &NewPost) -> PathBuf {
    content_dir
        .join(post.language.code())
        .join(format!("{}.{}", post.slug, extension))
}

fn write_pair(content_dir: &Path, extension: &str, pair: &[NewPost]) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = pair.iter()
        .map(|post| post_path(content_dir, extension, post))
        .collect();

    // Nothing is written if either file is already there
    for path in &paths {
        if path.exists() {
            bail!("Post already exists: {}", path.display());
        }
    }

    for (post, path) in pair.iter().zip(&paths) {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Error creating directory {}", dir.display()))?;
        }
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .with_context(|| format!("Error creating {}", path.display()))?;
        file.write_all(post.content.as_bytes())
            .with_context(|| format!("Error writing {}", path.display()))?;
        info!("Created {}", path.display());
    }

    Ok(paths)
}

pub(crate) fn new_post_cmd(config: &Config, args: NewArgs) -> Result<()> {
    let author = get_author(&args);
    let date = Local::now().format("%Y-%m-%d").to_string();
    let pair = build_pair(&args.title_es, &args.title_en, &author, &date)?;

    match args.output {
        PostOutput::Stdout => {
            for post in &pair {
                println!("# {}/{}.{}", post.language.code(), post.slug, config.defaults.extension);
                println!("{}", post.content);
            }
        }
        PostOutput::File => {
            let paths = write_pair(&config.paths.content_dir, &config.defaults.extension, &pair)?;
            for path in paths {
                println!("Creating file {}", path.display());
            }
        }
    }

    Ok(())
}
