use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use crate::front_matter::{FieldValue, FrontMatter};

/// The two locales of the blog. Translation links always point to the other one.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum Language {
    Es,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Es => "Spanish",
            Language::En => "English",
        }
    }

    pub fn opposite(&self) -> Language {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    Flag(bool),
    /// Present, but not `true` or `false`
    Invalid,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageRef {
    pub url: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostHeader {
    pub title: Option<String>,
    pub description: Option<String>,
    pub pub_date: Option<String>,
    pub related_slug: Option<String>,
    pub draft: Option<Draft>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub image: Option<ImageRef>,
    /// Fields we don't know about. Kept, never checked.
    pub extra: BTreeMap<String, FieldValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub language: Language,
    pub slug: String,
    pub file_path: PathBuf,
    pub header: PostHeader,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} file={} title={} related={}",
               self.language,
               self.slug,
               self.file_path.display(),
               self.header.title.as_deref().unwrap_or(""),
               self.header.related_slug.as_deref().unwrap_or(""),
        )
    }
}

impl Post {
    pub fn new(language: Language, file_path: &Path, front_matter: FrontMatter) -> Post {
        Post {
            language,
            slug: slug_from_path(file_path),
            file_path: file_path.to_path_buf(),
            header: PostHeader::from(front_matter),
        }
    }
}

/// Slug is the file name without its extension
pub fn slug_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

impl From<FrontMatter> for PostHeader {
    fn from(mut fm: FrontMatter) -> Self {
        let title = take_text(&mut fm, "title");
        let description = take_text(&mut fm, "description");
        let pub_date = take_text(&mut fm, "pubDate");
        let related_slug = take_text(&mut fm, "relatedSlug");
        let author = take_text(&mut fm, "author");

        let draft = fm.remove("draft").map(|val| match val {
            FieldValue::Bool(b) => Draft::Flag(b),
            _ => Draft::Invalid,
        });

        let tags = fm.remove("tags").map(|val| match val {
            FieldValue::List(items) => items,
            FieldValue::Text(s) if !s.trim().is_empty() => vec![s],
            _ => vec![],
        });

        // `image: ""` counts as no image at all
        let image = match fm.remove("image") {
            None => None,
            Some(FieldValue::Text(s)) if s.trim().is_empty() => None,
            Some(FieldValue::Object(obj)) => Some(ImageRef {
                url: non_empty(obj.get("url")),
                alt: non_empty(obj.get("alt")),
            }),
            Some(_) => Some(ImageRef::default()),
        };

        PostHeader {
            title,
            description,
            pub_date,
            related_slug,
            draft,
            tags,
            author,
            image,
            extra: fm,
        }
    }
}

fn take_text(fm: &mut FrontMatter, key: &str) -> Option<String> {
    non_empty(fm.remove(key).as_ref())
}

fn non_empty(val: Option<&FieldValue>) -> Option<String> {
    val.and_then(|v| v.as_text())
        .filter(|s| !s.trim().is_empty())
}
