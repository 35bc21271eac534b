/// URL-safe slug for a title: ASCII, lowercase, words joined by `-`
pub fn slugify(text: &str) -> String {
    let ascii = unidecode::unidecode(text);

    let mut slug = String::new();
    let mut prev_dash = true;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}
