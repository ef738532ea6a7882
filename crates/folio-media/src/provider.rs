//! File-hosting provider detection and link rewriting.
//!
//! Providers are an ordered table of `HostRule` rows. The first row whose
//! predicate matches the hostname owns the link; a rewrite that returns
//! `None` (e.g. a Drive link with no file id) falls back to plain encoding.
//! Adding a provider means adding a row, not touching existing ones.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::encode::encode_uri;

/// File-id patterns for Drive links, tried in order against the full URL.
static DRIVE_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"/file/d/([a-zA-Z0-9_-]+)",
        r"[?&]id=([a-zA-Z0-9_-]+)",
        r"/d/([a-zA-Z0-9_-]+)",
        r"/thumbnail\?id=([a-zA-Z0-9_-]+)",
        r"/uc\?(?:.*&)?id=([a-zA-Z0-9_-]+)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("drive id pattern should compile"))
    .collect()
});

static DROPBOX_DL_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<sep>[?&])dl=[01]\b").expect("dropbox dl pattern should compile")
});

static DROPBOX_RAW_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&]raw=1\b").expect("dropbox raw pattern should compile")
});

const DRIVE_HOSTS: [&str; 3] = ["drive.google.com", "docs.google.com", "googleusercontent.com"];

/// Which hosting provider a link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    GoogleDrive,
    Dropbox,
    Generic,
}

impl Provider {
    /// Classify a lowercase hostname. First matching row of the table wins.
    #[must_use]
    pub fn for_host(host: &str) -> Self {
        rule_for(host).map_or(Self::Generic, |rule| rule.provider)
    }
}

/// A parsed link handed to provider rewrites.
pub(crate) struct Link<'a> {
    /// The cleaned, unparsed value as the admin pasted it.
    pub value: &'a str,
    pub url: &'a Url,
    /// Lowercased hostname (empty for host-less URLs).
    pub host: String,
}

impl<'a> Link<'a> {
    pub fn new(value: &'a str, url: &'a Url) -> Self {
        Self {
            value,
            url,
            host: url.host_str().unwrap_or_default().to_ascii_lowercase(),
        }
    }
}

struct HostRule {
    provider: Provider,
    matches: fn(&str) -> bool,
    rewrite: fn(&Link<'_>) -> Option<String>,
}

const HOST_RULES: &[HostRule] = &[
    HostRule {
        provider: Provider::GoogleDrive,
        matches: is_drive_host,
        rewrite: rewrite_drive,
    },
    HostRule {
        provider: Provider::Dropbox,
        matches: is_dropbox_host,
        rewrite: rewrite_dropbox,
    },
    HostRule {
        provider: Provider::Generic,
        matches: matches_any_host,
        rewrite: encode_unchanged,
    },
];

/// Rewrite a parsed link with the first matching provider rule.
///
/// Returns `None` when the owning rule declines; the caller then encodes the
/// value as is.
pub(crate) fn rewrite(link: &Link<'_>) -> Option<(Provider, String)> {
    let rule = rule_for(&link.host)?;
    (rule.rewrite)(link).map(|rewritten| (rule.provider, rewritten))
}

fn rule_for(host: &str) -> Option<&'static HostRule> {
    HOST_RULES.iter().find(|rule| (rule.matches)(host))
}

fn is_drive_host(host: &str) -> bool {
    DRIVE_HOSTS.iter().any(|drive| host.contains(drive))
}

fn is_dropbox_host(host: &str) -> bool {
    host.contains("dropbox.com")
}

const fn matches_any_host(_host: &str) -> bool {
    true
}

#[allow(clippy::unnecessary_wraps)]
fn encode_unchanged(link: &Link<'_>) -> Option<String> {
    Some(encode_uri(link.value))
}

// ── Google Drive ───────────────────────────────────────────────────

/// Direct-link formats Drive serves for a file id, in retry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveForm {
    /// `thumbnail?id=..&sz=w2000`: renders inline, also for resource-key files.
    Thumbnail,
    /// `uc?export=view`: may hit a confirmation page for large files.
    View,
    /// `uc?export=download`: most widely available, slowest.
    Download,
}

impl DriveForm {
    pub const ALL: [Self; 3] = [Self::Thumbnail, Self::View, Self::Download];

    /// Build the URL for this form. `resource_key` is URL-encoded.
    #[must_use]
    pub fn url(self, file_id: &str, resource_key: Option<&str>) -> String {
        let base = match self {
            Self::Thumbnail => format!("https://drive.google.com/thumbnail?id={file_id}&sz=w2000"),
            Self::View => format!("https://drive.google.com/uc?export=view&id={file_id}"),
            Self::Download => format!("https://drive.google.com/uc?export=download&id={file_id}"),
        };
        match resource_key {
            Some(key) => format!("{base}&resourcekey={}", urlencoding::encode(key)),
            None => base,
        }
    }
}

/// A Drive file reference extracted from a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveLink {
    pub file_id: String,
    pub resource_key: Option<String>,
}

impl DriveLink {
    pub(crate) fn from_link(link: &Link<'_>) -> Option<Self> {
        if !is_drive_host(&link.host) {
            return None;
        }
        let file_id = extract_drive_file_id(link.value)?;
        let resource_key = link
            .url
            .query_pairs()
            .find(|(name, _)| name == "resourcekey")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());
        Some(Self {
            file_id,
            resource_key,
        })
    }

    #[must_use]
    pub fn url(&self, form: DriveForm) -> String {
        form.url(&self.file_id, self.resource_key.as_deref())
    }
}

/// Extract a Drive file id from any of the known share-link shapes.
fn extract_drive_file_id(value: &str) -> Option<String> {
    DRIVE_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(value)
            .and_then(|caps| caps.get(1))
            .map(|id| id.as_str().to_string())
    })
}

fn rewrite_drive(link: &Link<'_>) -> Option<String> {
    DriveLink::from_link(link).map(|drive| drive.url(DriveForm::Thumbnail))
}

// ── Dropbox ────────────────────────────────────────────────────────

fn rewrite_dropbox(link: &Link<'_>) -> Option<String> {
    let mut value = link.value.to_string();
    if link.host == "www.dropbox.com" {
        // ASCII lowercasing keeps byte offsets, so the match indexes `value`.
        if let Some(start) = value.to_ascii_lowercase().find("www.dropbox.com") {
            value.replace_range(start..start + "www.dropbox.com".len(), "dl.dropboxusercontent.com");
        }
    }

    let (body, fragment) = match value.find('#') {
        Some(idx) => value.split_at(idx),
        None => (value.as_str(), ""),
    };

    let body = if DROPBOX_DL_PARAM.is_match(body) {
        DROPBOX_DL_PARAM.replace_all(body, "${sep}raw=1").into_owned()
    } else if DROPBOX_RAW_PARAM.is_match(body) {
        body.to_string()
    } else if body.ends_with('?') || body.ends_with('&') {
        format!("{body}raw=1")
    } else if body.contains('?') {
        format!("{body}&raw=1")
    } else {
        format!("{body}?raw=1")
    };

    Some(encode_uri(&format!("{body}{fragment}")))
}
