#[cfg(test)]
pub const FULL_POST_ES: &str = r#"---
title: "Mi primer post"
description: "Lo que aprendí escribiendo un validador"
pubDate: 2024-03-01
relatedSlug: my-first-post
draft: false
tags: [rust, blog]
author: Thiago
heroLayout: wide
image:
  url: "blog/cover-01"
  alt: "Portada"
---

# Mi primer post

Hola mundo.

---

Texto después de una línea horizontal.
"#;

#[cfg(test)]
pub const FULL_POST_EN: &str = r#"---
title: "My first post"
description: "What I learned writing a validator"
pubDate: 2024-03-01
relatedSlug: mi-primer-post
draft: false
tags:
  - rust
  - blog
author: Thiago
image:
  url: "blog/cover-01"
  alt: "Cover"
---

# My first post

Hello world.
"#;

/// A header with every field checked, linking to `related_slug`
#[cfg(test)]
pub fn complete_post(title: &str, related_slug: &str) -> String {
    format!(r#"---
title: "{title}"
description: "About {title}"
pubDate: 2024-05-10
relatedSlug: {related_slug}
draft: false
tags: [notes]
author: Thiago
image:
  url: "blog/{title}"
  alt: "{title}"
---
Body of {title}
"#)
}
