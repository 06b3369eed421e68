mod openai;

pub use openai::OpenAiAnalyzer;

use async_trait::async_trait;

pub const UNAVAILABLE_SUMMARY: &str = "Analysis unavailable";
pub const MISSING_SUMMARY: &str = "N/A";
pub const UNKNOWN_SENTIMENT: &str = "unknown";

/// Summary and sentiment derived from one feedback entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub summary: String,
    pub sentiment: String,
}

impl Analysis {
    /// Sentinel returned whenever the upstream call cannot complete
    pub fn unavailable() -> Self {
        Self {
            summary: UNAVAILABLE_SUMMARY.to_string(),
            sentiment: UNKNOWN_SENTIMENT.to_string(),
        }
    }
}

/// Best-effort feedback enrichment.
///
/// Implementations never fail: every internal error is mapped to
/// [`Analysis::unavailable`].
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Analysis;
}

/// Extract `summary:` / `sentiment:` lines from a free-form model reply.
///
/// Prefixes match case-insensitively at the start of a line; the value is
/// everything after the first colon, trimmed. A later matching line replaces
/// an earlier one. Missing prefixes keep their defaults.
pub fn parse_reply(reply: &str) -> Analysis {
    let mut analysis = Analysis {
        summary: MISSING_SUMMARY.to_string(),
        sentiment: UNKNOWN_SENTIMENT.to_string(),
    };

    for line in reply.lines() {
        let lowered = line.to_lowercase();
        let slot = if lowered.starts_with("summary:") {
            &mut analysis.summary
        } else if lowered.starts_with("sentiment:") {
            &mut analysis.sentiment
        } else {
            continue;
        };

        if let Some((_, value)) = line.split_once(':') {
            *slot = value.trim().to_string();
        }
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_lines() {
        let analysis = parse_reply("summary: great product\nsentiment: positive");
        assert_eq!(analysis.summary, "great product");
        assert_eq!(analysis.sentiment, "positive");
    }

    #[test]
    fn prefixes_are_case_insensitive_and_order_free() {
        let analysis = parse_reply("SENTIMENT:  negative \nSummary:late delivery");
        assert_eq!(analysis.summary, "late delivery");
        assert_eq!(analysis.sentiment, "negative");
    }

    #[test]
    fn keeps_text_after_first_colon_only() {
        let analysis = parse_reply("summary: ratio was 3:1 in favour\nsentiment: neutral");
        assert_eq!(analysis.summary, "ratio was 3:1 in favour");
    }

    #[test]
    fn ignores_surrounding_chatter() {
        let reply = "Here is the analysis.\n\nsummary: app crashes on login\nsentiment: negative\nHope this helps!";
        let analysis = parse_reply(reply);
        assert_eq!(analysis.summary, "app crashes on login");
        assert_eq!(analysis.sentiment, "negative");
    }

    #[test]
    fn missing_prefixes_fall_back_to_defaults() {
        assert_eq!(
            parse_reply("I could not analyze this."),
            Analysis {
                summary: "N/A".to_string(),
                sentiment: "unknown".to_string(),
            }
        );

        let only_sentiment = parse_reply("sentiment: positive");
        assert_eq!(only_sentiment.summary, "N/A");
        assert_eq!(only_sentiment.sentiment, "positive");
    }

    #[test]
    fn indented_prefix_does_not_match() {
        let analysis = parse_reply("  summary: indented");
        assert_eq!(analysis.summary, "N/A");
    }

    #[test]
    fn last_matching_line_wins() {
        let analysis = parse_reply("summary: first\nsummary: second");
        assert_eq!(analysis.summary, "second");
    }

    #[test]
    fn unavailable_sentinel() {
        let analysis = Analysis::unavailable();
        assert_eq!(analysis.summary, "Analysis unavailable");
        assert_eq!(analysis.sentiment, "unknown");
    }
}
