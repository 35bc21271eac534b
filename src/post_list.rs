use std::collections::HashMap;
use std::io::ErrorKind;
use std::fs::DirEntry;
use std::path::{Path, PathBuf};
use std::{fs, io};

use spdlog::{debug, info, warn};

use crate::front_matter::parse_front_matter;
use crate::post::{Language, Post};

pub struct PostList {
    pub root_dir: PathBuf,
    pub extension: String,
}

enum Entry {
    Content(PathBuf),
    Skipped,
    Failed(UnreadableFile),
}

impl PostList {
    /// Content files directly inside `root_dir`, sorted by path, and the entries that
    /// could not be inspected.
    pub fn retrieve_files(&self) -> io::Result<(Vec<PathBuf>, Vec<UnreadableFile>)> {
        let mut posts = vec![];
        let mut failed = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            match self.check_entry(entry) {
                Entry::Content(path) => posts.push(path),
                Entry::Failed(unreadable) => failed.push(unreadable),
                Entry::Skipped => {}
            }
        }
        posts.sort();
        Ok((posts, failed))
    }

    fn check_entry(&self, entry: io::Result<DirEntry>) -> Entry {
        let entry = match entry {
            Ok(entry) => entry,
            // No path for this entry, blame the directory
            Err(error) => return Entry::Failed(UnreadableFile { file_path: self.root_dir.clone(), error }),
        };

        let path = entry.path();
        match entry.file_type() {
            Ok(file_type) if file_type.is_file() && self.has_extension(&path) => Entry::Content(path),
            Ok(_) => Entry::Skipped,
            Err(error) if self.has_extension(&path) => Entry::Failed(UnreadableFile { file_path: path, error }),
            Err(_) => Entry::Skipped,
        }
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == self.extension)
            .unwrap_or(false)
    }
}

#[derive(Debug)]
pub struct UnreadableFile {
    pub file_path: PathBuf,
    pub error: io::Error,
}

#[derive(Default)]
pub struct PostSet {
    posts: Vec<Post>,
    // language -> slug -> index in posts
    by_slug: HashMap<Language, HashMap<String, usize>>,
    unreadable: Vec<UnreadableFile>,
}

impl PostSet {
    pub fn new() -> PostSet {
        Default::default()
    }

    pub fn from_posts(posts: Vec<Post>) -> PostSet {
        let mut set = PostSet::new();
        for post in posts {
            set.add(post);
        }
        set
    }

    pub fn add(&mut self, post: Post) {
        let idx = self.posts.len();
        self.by_slug.entry(post.language)
            .or_default()
            .insert(post.slug.clone(), idx);
        self.posts.push(post);
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find(&self, language: Language, slug: &str) -> Option<&Post> {
        self.by_slug.get(&language)
            .and_then(|slugs| slugs.get(slug))
            .map(|idx| &self.posts[*idx])
    }

    pub fn count(&self, language: Language) -> usize {
        self.by_slug.get(&language).map(|slugs| slugs.len()).unwrap_or(0)
    }

    pub fn unreadable(&self) -> &[UnreadableFile] {
        &self.unreadable
    }
}

/// Reads `<content_dir>/es` and `<content_dir>/en`.
///
/// A missing language directory contributes no posts. A file that can't be read is
/// kept aside in [`PostSet::unreadable`] and the rest are still loaded.
pub fn load_posts(content_dir: &Path, extension: &str) -> io::Result<PostSet> {
    let metadata = match fs::metadata(content_dir) {
        Ok(metadata) => metadata,
        Err(e) => return Err(io::Error::new(
            e.kind(), format!("Error opening content directory {}: {}", content_dir.display(), e))),
    };

    if !metadata.is_dir() {
        return Err(io::Error::new(
            ErrorKind::InvalidInput, format!("Content path is not a directory: {}", content_dir.display())));
    }

    let mut set = PostSet::new();

    for language in Language::ALL {
        let lang_dir = content_dir.join(language.code());
        if !lang_dir.is_dir() {
            debug!("No {} directory at {}, skipping", language.name(), lang_dir.display());
            continue;
        }

        let post_list = PostList {
            root_dir: lang_dir,
            extension: extension.to_string(),
        };

        let (files, failed) = match post_list.retrieve_files() {
            Ok(listing) => listing,
            Err(e) => return Err(io::Error::new(
                e.kind(), format!("Error listing {}: {}", post_list.root_dir.display(), e))),
        };

        for unreadable in failed {
            warn!("Could not inspect entry in {}: {}", unreadable.file_path.display(), unreadable.error);
            set.unreadable.push(unreadable);
        }

        for file_path in files {
            match fs::read_to_string(&file_path) {
                Ok(content) => {
                    let post = Post::new(language, &file_path, parse_front_matter(&content));
                    debug!("Loaded {}", post);
                    set.add(post);
                }
                Err(error) => {
                    warn!("Could not read {}: {}", file_path.display(), error);
                    set.unreadable.push(UnreadableFile { file_path, error });
                }
            }
        }

        info!("Loaded {} {} posts", set.count(language), language.name());
    }

    Ok(set)
}
