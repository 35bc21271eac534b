use crate::post::Post;
use crate::post_list::PostSet;
use crate::validation::Finding;

/// Checks the translation links between the two languages.
///
/// Runs once per post, not once per pair, so a broken pair can be reported from both sides.
pub fn validate_links(set: &PostSet) -> Vec<Finding> {
    let mut findings = vec![];
    for post in set.posts() {
        if let Some(finding) = check_link(post, set) {
            findings.push(finding);
        }
    }
    findings
}

fn check_link(post: &Post, set: &PostSet) -> Option<Finding> {
    let file = &post.file_path;

    let Some(ref related) = post.header.related_slug else {
        return Some(Finding::warning(file, "No translation link (relatedSlug) specified"));
    };

    if *related == post.slug {
        return Some(Finding::error(file, format!("relatedSlug points to itself: {}", related)));
    }

    let other = post.language.opposite();
    let Some(target) = set.find(other, related) else {
        return Some(Finding::error(file, format!("relatedSlug '{}' not found in {} posts", related, other.code())));
    };

    match target.header.related_slug {
        Some(ref back) if *back == post.slug => None,
        Some(ref back) => Some(Finding::error(file, format!(
            "Translation link mismatch: '{}' links to '{}', but '{}' links back to '{}'",
            post.slug, related, related, back))),
        None => Some(Finding::error(file, format!(
            "Translation link mismatch: '{}' links to '{}', but '{}' has no relatedSlug",
            post.slug, related, related))),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::front_matter::parse_front_matter;
    use crate::post::Language;
    use crate::test_data::complete_post;
    use crate::validation::Severity;

    use super::*;

    fn post(language: Language, slug: &str, related: Option<&str>) -> Post {
        let path = PathBuf::from(format!("content/{}/{}.md", language.code(), slug));
        let content = match related {
            Some(related) => complete_post(slug, related),
            None => complete_post(slug, "x").replace("relatedSlug: x\n", ""),
        };
        Post::new(language, &path, parse_front_matter(&content))
    }

    fn findings_for(posts: Vec<Post>) -> Vec<(String, Severity, String)> {
        let set = PostSet::from_posts(posts);
        validate_links(&set).into_iter()
            .map(|f| (f.file.display().to_string(), f.severity, f.message))
            .collect()
    }

    #[test]
    fn test_symmetric_pair() {
        let findings = findings_for(vec![
            post(Language::Es, "foo", Some("foo-en")),
            post(Language::En, "foo-en", Some("foo")),
        ]);
        assert!(findings.is_empty(), "{:?}", findings);
    }

    #[test]
    fn test_missing_link() {
        let findings = findings_for(vec![post(Language::Es, "solo", None)]);
        assert_eq!(findings, [(
            "content/es/solo.md".to_string(),
            Severity::Warning,
            "No translation link (relatedSlug) specified".to_string(),
        )]);
    }

    #[test]
    fn test_self_reference() {
        // A same-slug post in the other language must not hide the self reference
        let findings = findings_for(vec![
            post(Language::Es, "baz", Some("baz")),
            post(Language::En, "baz", Some("baz")),
        ]);
        assert_eq!(findings.len(), 2);
        for (_, severity, message) in &findings {
            assert_eq!(*severity, Severity::Error);
            assert_eq!(message, "relatedSlug points to itself: baz");
        }
    }

    #[test]
    fn test_dangling_link() {
        let findings = findings_for(vec![post(Language::Es, "qux", Some("qux-en"))]);
        assert_eq!(findings, [(
            "content/es/qux.md".to_string(),
            Severity::Error,
            "relatedSlug 'qux-en' not found in en posts".to_string(),
        )]);
    }

    #[test]
    fn test_lookup_only_in_other_language() {
        // Target exists, but in the same language
        let findings = findings_for(vec![
            post(Language::En, "a", Some("b")),
            post(Language::En, "b", Some("a")),
        ]);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].2, "relatedSlug 'b' not found in es posts");
        assert_eq!(findings[1].2, "relatedSlug 'a' not found in es posts");
    }

    #[test]
    fn test_asymmetric_link_reported_from_both_sides() {
        // a -> b-en -> c <-> d-en
        let findings = findings_for(vec![
            post(Language::Es, "a", Some("b-en")),
            post(Language::Es, "c", Some("d-en")),
            post(Language::En, "b-en", Some("c")),
            post(Language::En, "d-en", Some("c")),
        ]);
        assert_eq!(findings, [
            (
                "content/es/a.md".to_string(),
                Severity::Error,
                "Translation link mismatch: 'a' links to 'b-en', but 'b-en' links back to 'c'".to_string(),
            ),
            (
                "content/en/b-en.md".to_string(),
                Severity::Error,
                "Translation link mismatch: 'b-en' links to 'c', but 'c' links back to 'd-en'".to_string(),
            ),
        ]);
    }

    #[test]
    fn test_target_without_link() {
        let findings = findings_for(vec![
            post(Language::Es, "a", Some("a-en")),
            post(Language::En, "a-en", None),
        ]);
        assert_eq!(findings, [
            (
                "content/es/a.md".to_string(),
                Severity::Error,
                "Translation link mismatch: 'a' links to 'a-en', but 'a-en' has no relatedSlug".to_string(),
            ),
            (
                "content/en/a-en.md".to_string(),
                Severity::Warning,
                "No translation link (relatedSlug) specified".to_string(),
            ),
        ]);
    }
}
