use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::content::Localized;

#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{Options, Parser};
#[cfg(any(feature = "ssr", feature = "rss"))]
use regex::RegexBuilder;

#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::highlight;

const WORDS_PER_MINUTE: usize = 200;

pub static GLOBAL_POST_CACHE: LazyLock<DashMap<String, Option<Post>>> = LazyLock::new(DashMap::new);
pub static GLOBAL_META_CACHE: LazyLock<DashMap<String, Vec<PostMeta>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    #[serde(default)]
    title_fa: Option<String>,
    description: String,
    #[serde(default)]
    description_fa: Option<String>,
    author: String,
    date: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    image: Option<String>,
}

#[cfg(any(feature = "ssr", feature = "rss"))]
impl FrontMatter {
    fn into_meta(self, slug: String, body: &str) -> PostMeta {
        PostMeta {
            slug,
            title: Localized {
                en: self.title,
                fa: self.title_fa,
            },
            description: Localized {
                en: self.description,
                fa: self.description_fa,
            },
            author: self.author,
            date: self.date,
            tags: self.tags,
            image: self.image,
            reading_time: estimate_reading_time(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: Localized,
    pub description: Localized,
    pub author: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    /// Estimated minutes to read the body.
    pub reading_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    /// Markdown body rendered to HTML, front-matter stripped.
    pub content: String,
}

#[derive(Error, Debug, Clone)]
pub enum BlogError {
    #[error("Blog post not found")]
    NotFound,
    #[error("Couldn't parse blog posts")]
    ParseError,
}

/// Every embedded post slug (filename minus `.md`), in embed order.
pub fn slugs() -> Vec<String> {
    Assets::iter()
        .filter_map(|file| file.strip_suffix(".md").map(str::to_string))
        .collect()
}

/// Estimated reading time in whole minutes, never zero.
pub fn estimate_reading_time(body: &str) -> u32 {
    let words = body.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// List post metadata, newest first. With a non-empty `pattern`, only posts
/// whose raw document matches the pattern (case-insensitive regex) are kept.
/// Unreadable or front-matter-less files are skipped; nothing here errors.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn get_meta(pattern: String) -> Vec<PostMeta> {
    let cache = &*GLOBAL_META_CACHE;
    let is_base = pattern.is_empty();
    if is_base {
        if let Some(cached) = cache.get(&pattern) {
            return cached.clone();
        }
    }
    let filter = if is_base {
        None
    } else {
        match RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()
        {
            Ok(re) => Some(re),
            // a pattern that isn't a regex matches nothing
            Err(_) => return Vec::new(),
        }
    };

    let matter = Matter::<YAML>::new();
    let mut posts: Vec<PostMeta> = Assets::iter()
        .filter_map(|file| {
            let slug = file.strip_suffix(".md")?.to_string();
            let raw = Assets::get(&file)?;
            let source = String::from_utf8(raw.data.into()).ok()?;
            if let Some(re) = &filter {
                if !re.is_match(&source) {
                    return None;
                }
            }
            let fm = matter.parse_with_struct::<FrontMatter>(&source)?;
            Some(fm.data.into_meta(slug, &fm.content))
        })
        .collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    if is_base {
        cache.insert(pattern, posts.clone());
    }

    posts
}

/// A single post with its rendered body, or `None` when the file is missing
/// or its front-matter doesn't parse.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn get_post(slug: String) -> Option<Post> {
    let raw = Assets::get(&format!("{slug}.md"))?;

    let cache = &*GLOBAL_POST_CACHE;
    cache
        .entry(slug.clone())
        .or_insert_with(move || {
            let source = String::from_utf8(raw.data.into()).ok()?;
            let matter = Matter::<YAML>::new();
            let fm = matter.parse_with_struct::<FrontMatter>(&source)?;
            let meta = fm.data.into_meta(slug, &fm.content);

            let parser = Parser::new_ext(&fm.content, Options::all());
            let parser = highlight(parser);

            let mut html_output = String::new();
            pulldown_cmark::html::push_html(&mut html_output, parser);

            Some(Post {
                meta,
                content: html_output,
            })
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_strip_the_extension_and_keep_embed_order() {
        let listed = slugs();
        let expected: Vec<String> = Assets::iter()
            .filter_map(|file| file.strip_suffix(".md").map(str::to_string))
            .collect();
        assert_eq!(listed, expected);
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|slug| !slug.ends_with(".md")));
        assert!(listed.contains(&"rtl-typography".to_string()));
    }

    #[test]
    fn reading_time_is_positive_and_monotonic() {
        assert_eq!(estimate_reading_time(""), 1);
        assert_eq!(estimate_reading_time("a few short words"), 1);
        assert_eq!(estimate_reading_time(&"word ".repeat(250)), 2);
        assert_eq!(estimate_reading_time(&"word ".repeat(450)), 3);

        let mut last = 0;
        for words in [1, 150, 600, 2400] {
            let estimate = estimate_reading_time(&"word ".repeat(words));
            assert!(estimate >= last);
            last = estimate;
        }
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[tokio::test]
    async fn listing_returns_every_post_newest_first() {
        let posts = get_meta(String::new()).await;
        assert_eq!(posts.len(), 3);
        assert!(posts.windows(2).all(|pair| pair[0].date >= pair[1].date));
        assert_eq!(posts[0].slug, "rebuilding-with-rust");
        assert_eq!(posts[2].slug, "rtl-typography");
        assert!(posts.iter().all(|p| p.reading_time >= 1));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[tokio::test]
    async fn listing_filters_by_pattern() {
        let posts = get_meta("Vazirmatn".to_string()).await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "rtl-typography");

        assert!(get_meta("zzz-no-such-word".to_string()).await.is_empty());
        // an unparseable pattern matches nothing instead of erroring
        assert!(get_meta("(".to_string()).await.is_empty());
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[tokio::test]
    async fn post_body_renders_without_front_matter() {
        use crate::i18n::Locale;

        let post = get_post("rtl-typography".to_string())
            .await
            .expect("post should exist");
        assert!(post.content.contains("<h2"));
        assert!(post.content.contains("Logical properties"));
        // the YAML block must not leak into the rendered page
        assert!(!post.content.contains("title_fa"));
        assert_eq!(
            post.meta.title.get(Locale::Fa),
            "راست‌به‌چپ، به شکل درست؛ تایپوگرافی فارسی در وب"
        );
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[tokio::test]
    async fn fenced_code_blocks_are_highlighted() {
        let post = get_post("rebuilding-with-rust".to_string())
            .await
            .expect("post should exist");
        assert!(post.content.contains("<pre style="));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[tokio::test]
    async fn unknown_slug_is_none_not_a_panic() {
        assert!(get_post("no-such-post".to_string()).await.is_none());
        assert!(get_post(String::new()).await.is_none());
    }
}
