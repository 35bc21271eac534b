use crate::post::{Draft, Post, PostHeader};
use crate::validation::Finding;

const REQUIRED_FIELDS: [&str; 4] = ["title", "description", "pubDate", "relatedSlug"];

fn required_value<'a>(header: &'a PostHeader, field: &str) -> Option<&'a String> {
    match field {
        "title" => header.title.as_ref(),
        "description" => header.description.as_ref(),
        "pubDate" => header.pub_date.as_ref(),
        "relatedSlug" => header.related_slug.as_ref(),
        _ => None,
    }
}

/// Checks presence and shape of the header fields of every post.
///
/// Order per post: required fields, then draft, tags, author and image.
pub fn validate_fields(posts: &[Post], default_author: &str) -> Vec<Finding> {
    let mut findings = vec![];
    for post in posts {
        validate_post_fields(post, default_author, &mut findings);
    }
    findings
}

fn validate_post_fields(post: &Post, default_author: &str, findings: &mut Vec<Finding>) {
    let file = &post.file_path;
    let header = &post.header;

    for field in REQUIRED_FIELDS {
        if required_value(header, field).is_none() {
            findings.push(Finding::error(file, format!("Missing required field: {}", field)));
        }
    }

    match header.draft {
        None => findings.push(Finding::warning(file, "Missing 'draft' field (defaults to false)")),
        Some(Draft::Invalid) => findings.push(Finding::warning(file, "'draft' should be true or false")),
        Some(Draft::Flag(_)) => {}
    }

    let no_tags = header.tags.as_ref().map(|tags| tags.is_empty()).unwrap_or(true);
    if no_tags {
        findings.push(Finding::warning(file, "No tags specified"));
    }

    if header.author.is_none() {
        findings.push(Finding::warning(file, format!("Missing 'author' field (defaults to {})", default_author)));
    }

    match header.image {
        None => findings.push(Finding::warning(file, "No image specified")),
        Some(ref image) if image.url.is_none() => {
            findings.push(Finding::error(file, "Image object missing 'url' field"));
        }
        Some(ref image) if image.alt.is_none() => {
            findings.push(Finding::warning(file, "Image missing 'alt' text"));
        }
        Some(_) => {}
    }
}
