//! Rating extraction from IMDb HTML pages.
//!
//! Pure functions over page text. IMDb has changed its markup several
//! times, so each value is looked up through a short list of patterns and
//! the first hit wins.

use crate::domain::entities::{EpisodeRef, SourceRating};
use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;
use thiserror::Error;

static AGGREGATE_RATING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""aggregateRating"\s*:\s*\{([^{}]*)\}"#).unwrap());

static RATING_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""ratingValue"\s*:\s*"?(\d+(?:\.\d+)?)"?"#).unwrap());

static RATING_COUNT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""ratingCount"\s*:\s*"?(\d+)"?"#).unwrap());

/// Legacy microformat markup.
static V_AVERAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"property="v:average">(\d+(?:\.\d+)?)"#).unwrap());

static TITLE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title>([^<]+)</title>").unwrap());

static IMDB_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*IMDb.*$").unwrap());

static JSON_LD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<script[^>]*application/ld\+json"#).unwrap());

static VOTE_COUNT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:[.,]\d+)*)([KkMm]?)$").unwrap());

/// `S1.E5` as printed in episode titles.
static EPISODE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"S(\d+)\.E(\d+)\b").unwrap());

/// `episode-5` as used in element ids of older listings.
static EPISODE_ANCHOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)episode-(\d+)\b").unwrap());

/// `S1.E5 ∙ Title</div> … 7.4</span> … (<!-- -->1.6K<!-- -->)`
static CURRENT_EPISODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^S\d+\.E\d+\s*∙\s*([^<]+)</div>.*?(\d+\.\d+)</span>.*?\(<!-- -->([\d.,]+[KkMm]?)<!-- -->\)",
    )
    .unwrap()
});

/// `S1.E5 <span>Title</span> … 7.4</span> … (1600)`
static ALTERNATE_EPISODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?si)^S\d+\.E\d+[^>]*>([^<]+)<.*?(\d+\.\d+)</span>.*?\(([\d.,]+[KkMm]?)\)")
        .unwrap()
});

/// `episode-5 … 7.4</span> … (1600)`
static BARE_EPISODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(\d+\.\d+)</span>.*?\(([\d.,]+[KkMm]?)\)").unwrap()
});

/// The page is neither an IMDb title page nor an episode listing, e.g. an
/// empty body or a bot challenge.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("page is not an IMDb title or episode listing")]
pub struct UnrecognizedPage;

/// Extracts the aggregate rating of a title page.
///
/// `Ok(None)` when the page is a title page without a rating, e.g. for
/// unreleased titles.
pub fn title_rating(html: &str) -> Result<Option<SourceRating>, UnrecognizedPage> {
    // Scope to the aggregateRating object first so a review's
    // ratingValue elsewhere on the page is not picked up.
    let aggregate = AGGREGATE_RATING_REGEX
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());

    let rating = aggregate
        .and_then(|block| capture_f64(&RATING_VALUE_REGEX, block))
        .or_else(|| capture_f64(&RATING_VALUE_REGEX, html))
        .or_else(|| capture_f64(&V_AVERAGE_REGEX, html));

    let Some(rating) = rating else {
        return if is_imdb_page(html) {
            Ok(None)
        } else {
            Err(UnrecognizedPage)
        };
    };

    let vote_count = aggregate
        .and_then(|block| capture_u64(&RATING_COUNT_REGEX, block))
        .or_else(|| capture_u64(&RATING_COUNT_REGEX, html));

    Ok(Some(SourceRating {
        title: page_title(html),
        rating,
        vote_count,
    }))
}

/// Extracts one episode's rating from a season listing page.
///
/// Only the markup between the episode's marker and the next episode's
/// marker is searched; `episode-N` anchors are used only when the page has no
/// `S{n}.E{m}` marker for the episode. `Ok(None)` when the listing does not have the episode
/// or the episode has no rating yet.
pub fn episode_rating(
    html: &str,
    episode: EpisodeRef,
) -> Result<Option<SourceRating>, UnrecognizedPage> {
    if let Some(section) = titled_section(html, episode) {
        let section = &html[section];
        for re in [&*CURRENT_EPISODE_REGEX, &*ALTERNATE_EPISODE_REGEX] {
            let Some(caps) = re.captures(section) else {
                continue;
            };
            let Some(rating) = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok()) else {
                continue;
            };
            return Ok(Some(SourceRating {
                title: caps
                    .get(1)
                    .map(|m| clean_text(m.as_str()))
                    .filter(|t| !t.is_empty()),
                rating,
                vote_count: caps.get(3).and_then(|m| parse_vote_count(m.as_str())),
            }));
        }
    } else if let Some(section) = anchored_section(html, episode.episode) {
        // Older listings without `S{n}.E{m}` titles.
        let rating = BARE_EPISODE_REGEX.captures(&html[section]).and_then(|caps| {
            Some(SourceRating {
                title: None,
                rating: caps.get(1)?.as_str().parse::<f64>().ok()?,
                vote_count: caps.get(2).and_then(|m| parse_vote_count(m.as_str())),
            })
        });
        if rating.is_some() {
            return Ok(rating);
        }
    }

    let is_listing = EPISODE_MARKER_REGEX.is_match(html) || EPISODE_ANCHOR_REGEX.is_match(html);
    if is_listing || is_imdb_page(html) {
        Ok(None)
    } else {
        Err(UnrecognizedPage)
    }
}

/// Byte range from the `S{season}.E{episode}` marker to the next marker of
/// a different episode, or the end of the page.
fn titled_section(html: &str, episode: EpisodeRef) -> Option<Range<usize>> {
    section(html, &EPISODE_MARKER_REGEX, |caps| {
        number(caps, 1) == Some(episode.season) && number(caps, 2) == Some(episode.episode)
    })
}

/// Same as [`titled_section`] for `episode-N` anchors, which carry no season.
fn anchored_section(html: &str, episode: u32) -> Option<Range<usize>> {
    section(html, &EPISODE_ANCHOR_REGEX, |caps| number(caps, 1) == Some(episode))
}

fn section(
    html: &str,
    marker: &Regex,
    is_target: impl Fn(&Captures<'_>) -> bool,
) -> Option<Range<usize>> {
    let mut markers = marker.captures_iter(html);
    let start = markers.find(|caps| is_target(caps))?.get(0)?.start();
    let end = markers
        .find(|caps| !is_target(caps))
        .and_then(|caps| caps.get(0))
        .map_or(html.len(), |m| m.start());

    Some(start..end)
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// IMDb pages carry either JSON-LD metadata or a `… - IMDb` title.
fn is_imdb_page(html: &str) -> bool {
    JSON_LD_REGEX.is_match(html)
        || TITLE_TAG_REGEX
            .captures(html)
            .and_then(|c| c.get(1))
            .is_some_and(|m| IMDB_SUFFIX_REGEX.is_match(m.as_str()))
}

/// Parses a vote count as IMDb prints it: `987`, `12,345`, `1.2K`, `3M`.
pub fn parse_vote_count(raw: &str) -> Option<u64> {
    let caps = VOTE_COUNT_REGEX.captures(raw.trim())?;
    let number = caps.get(1)?.as_str();
    let multiplier = match caps.get(2).map(|m| m.as_str()) {
        Some("K") | Some("k") => 1_000.0,
        Some("M") | Some("m") => 1_000_000.0,
        _ => return number.replace(',', "").parse().ok(),
    };

    let value: f64 = number.replace(',', ".").parse().ok()?;
    Some((value * multiplier).round() as u64)
}

fn page_title(html: &str) -> Option<String> {
    let raw = TITLE_TAG_REGEX.captures(html)?.get(1)?.as_str();
    let title = IMDB_SUFFIX_REGEX.replace(raw.trim(), "");
    let title = clean_text(&title);
    (!title.is_empty()).then_some(title)
}

fn clean_text(raw: &str) -> String {
    raw.trim()
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

fn capture_f64(re: &Regex, haystack: &str) -> Option<f64> {
    re.captures(haystack)?.get(1)?.as_str().parse().ok()
}

fn capture_u64(re: &Regex, haystack: &str) -> Option<u64> {
    re.captures(haystack)?.get(1)?.as_str().parse().ok()
}
