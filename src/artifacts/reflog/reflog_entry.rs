use chrono::{DateTime, Local};

/// Minimum number of space-delimited tokens in a well-formed reflog line
const MIN_LINE_TOKENS: usize = 7;

/// Minimum metadata tokens ahead of the message: old sha, new sha, at least a
/// two-part author field, timestamp, timezone
const MIN_METADATA_TOKENS: usize = 6;

/// One parsed reflog line
///
/// Fields mirror the on-disk format. The author's name and email are kept
/// collapsed in a single free-text field; names containing embedded spaces
/// shaped like email brackets are accepted as-is. The timezone token is kept
/// verbatim and never interpreted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReflogEntry {
    /// Commit id the reference pointed at before the update
    pub previous_ref: String,
    /// Commit id the reference points at after the update
    pub new_ref: String,
    /// Author name and email, as written in the log
    pub author: String,
    /// Unix epoch seconds of the update
    pub timestamp_seconds: i64,
    /// Raw offset token, e.g. `+0200`
    pub timezone: String,
    /// Free-text message after the tab separator
    pub message: String,
}

impl ReflogEntry {
    /// Parse one reflog line
    ///
    /// Returns `None` for malformed lines: fewer than seven space-delimited
    /// tokens, truncated metadata, or a timestamp that is not a representable
    /// epoch second. The message is everything after the first tab; a line
    /// without a tab has an empty message, which is not an error.
    pub fn try_parse(line: &str) -> Option<Self> {
        if line.split(' ').count() < MIN_LINE_TOKENS {
            return None;
        }

        let (metadata, message) = match line.split_once('\t') {
            Some((metadata, message)) => (metadata, message),
            None => (line, ""),
        };

        let tokens = metadata.split(' ').collect::<Vec<_>>();
        if tokens.len() < MIN_METADATA_TOKENS {
            return None;
        }

        let timestamp_seconds = tokens[tokens.len() - 2].parse::<i64>().ok()?;
        DateTime::from_timestamp(timestamp_seconds, 0)?;

        Some(ReflogEntry {
            previous_ref: tokens[0].to_string(),
            new_ref: tokens[1].to_string(),
            author: tokens[2..tokens.len() - 2].join(" "),
            timezone: tokens[tokens.len() - 1].to_string(),
            timestamp_seconds,
            message: message.to_string(),
        })
    }

    /// Timestamp formatted as local wall-clock time
    ///
    /// # Returns
    ///
    /// String like "Tue Nov 14 22:13:20 2023"
    pub fn readable_timestamp(&self) -> String {
        DateTime::from_timestamp(self.timestamp_seconds, 0)
            .map(|utc| {
                utc.with_timezone(&Local)
                    .format("%a %b %-d %H:%M:%S %Y")
                    .to_string()
            })
            .unwrap_or_else(|| self.timestamp_seconds.to_string())
    }
}
