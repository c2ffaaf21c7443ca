/// Response formatter: pure projection of store records into the public
/// related-post shape.
///
/// Formatting never touches the store and never fails on missing optional
/// fields: absent avatars and images become `null` so the frontend can
/// substitute its local placeholder assets.
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::config::SiteConfig;
use crate::models::{PostRecord, RelatedPost};
use crate::services::date_format;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Decode HTML entities and drop markup, collapsing runs of whitespace.
fn plain_text(html: &str) -> String {
    let stripped = TAG_RE.replace_all(html, " ");
    let decoded = html_escape::decode_html_entities(stripped.as_ref()).into_owned();
    WS_RE.replace_all(decoded.trim(), " ").into_owned()
}

/// Cap `text` at `words` words, appending an ellipsis when truncated.
fn trim_words(text: &str, words: usize) -> String {
    let all: Vec<&str> = text.split_whitespace().collect();
    if all.len() <= words {
        return all.join(" ");
    }
    let mut out = all[..words].join(" ");
    out.push('…');
    out
}

/// Excerpt for a post: the manual excerpt when one is set, otherwise the
/// content body reduced to plain text and word-capped.
fn excerpt_for(record: &PostRecord, words: usize) -> String {
    match record.excerpt.as_deref() {
        Some(manual) if !manual.trim().is_empty() => plain_text(manual),
        _ => trim_words(&plain_text(&record.content), words),
    }
}

/// Canonical permalink for a post slug.
fn permalink(base_url: &str, slug: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), slug)
}

/// Gravatar URL for an email address: SHA-256 of the normalized address,
/// with `d=mp` so unknown addresses resolve to the generic default.
fn gravatar_url(email: &str, size: u32) -> String {
    let normalized = email.trim().to_lowercase();
    let hash = hex::encode(Sha256::digest(normalized.as_bytes()));
    format!("https://www.gravatar.com/avatar/{}?s={}&d=mp", hash, size)
}

/// Avatar for an author: an explicitly stored URL wins, then a Gravatar
/// derived from the email, then nothing.
fn avatar_for(record: &PostRecord, size: u32) -> Option<String> {
    if let Some(url) = record.author_avatar_url.as_deref() {
        if !url.is_empty() {
            return Some(url.to_string());
        }
    }
    record
        .author_email
        .as_deref()
        .filter(|email| !email.trim().is_empty())
        .map(|email| gravatar_url(email, size))
}

/// Featured image at the "medium" rendition, falling back to "full".
fn featured_image_for(record: &PostRecord) -> Option<String> {
    let renditions = record.featured_media.as_ref()?;
    for size in ["medium", "full"] {
        if let Some(url) = renditions.get(size).and_then(|v| v.as_str()) {
            return Some(url.to_string());
        }
    }
    None
}

/// Project one store record into the public shape.
pub fn format_post(record: &PostRecord, format: &str, site: &SiteConfig) -> RelatedPost {
    let local = record.published_at.with_timezone(&site.timezone);

    RelatedPost {
        id: record.id,
        title: plain_text(&record.title),
        date: date_format::format_php(format, &local),
        excerpt: excerpt_for(record, site.excerpt_words),
        url: permalink(&site.base_url, &record.slug),
        author: record.author_name.clone(),
        author_avatar: avatar_for(record, site.avatar_size),
        featured_image: featured_image_for(record),
    }
}

/// Project a sequence of records, preserving order.
pub fn format_posts(records: &[PostRecord], format: &str, site: &SiteConfig) -> Vec<RelatedPost> {
    records
        .iter()
        .map(|record| format_post(record, format, site))
        .collect()
}

/// Render the current instant in the site timezone.
pub fn current_date(format: &str, site: &SiteConfig) -> String {
    date_format::format_php(format, &Utc::now().with_timezone(&site.timezone))
}
