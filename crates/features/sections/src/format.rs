//! Small display formatters shared by several sections.

use serde::Serialize;
use vinewood_domain::constants::{CONNECT_SCHEME, PLACEHOLDER_SERVER_CODE};

/// Two-digit ordinal used for list numbering (`01`, `02`, ...).
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Four-digit zero padded image id (`0007`).
pub fn padded_id(id: u32) -> String {
    format!("{id:04}")
}

/// Whole dollars with thousands separators: `12500` -> `$12,500`.
pub fn dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1 Photo`, `2 Photos`.
pub fn photo_count(count: usize) -> String {
    if count == 1 { "1 Photo".to_owned() } else { format!("{count} Photos") }
}

/// One word of a split title; the last word carries the accent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleWord {
    pub text: String,
    pub accent: bool,
}

pub fn split_title(title: &str) -> Vec<TitleWord> {
    let words: Vec<&str> = title.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    words
        .into_iter()
        .enumerate()
        .map(|(i, word)| TitleWord { text: word.to_owned(), accent: i == last })
        .collect()
}

/// First whitespace-separated word of a display name.
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// Text between the first pair of single quotes (`Marcus 'Ghost' Vale` -> `Ghost`).
pub fn nickname(name: &str) -> Option<&str> {
    let (_, rest) = name.split_once('\'')?;
    let (nick, _) = rest.split_once('\'')?;
    (!nick.is_empty()).then_some(nick)
}

/// Game client deep link for a configured server code.
pub fn connect_url(server_code: Option<&str>) -> Option<String> {
    server_code
        .map(str::trim)
        .filter(|code| !code.is_empty() && *code != PLACEHOLDER_SERVER_CODE)
        .map(|code| format!("{CONNECT_SCHEME}{code}"))
}

/// `ip:port` when both halves are known.
pub fn server_address(ip: Option<&str>, port: Option<u16>) -> Option<String> {
    match (ip.filter(|ip| !ip.trim().is_empty()), port) {
        (Some(ip), Some(port)) => Some(format!("{ip}:{port}")),
        _ => None,
    }
}

/// Lowercased in-page anchor for a menu label.
pub fn anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}
