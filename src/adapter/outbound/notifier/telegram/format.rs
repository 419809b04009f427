//! Message formatting for Telegram alerts.

use crate::domain::Announcement;

const SUBJECT_LIMIT: usize = 300;
/// Telegram rejects messages above 4096 characters.
const MESSAGE_LIMIT: usize = 4000;

/// Format a batch of alerts into as few messages as fit the size limit.
pub fn format_batch(alerts: &[Announcement]) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = String::new();
    for alert in alerts {
        let block = format_alert(alert);
        if !current.is_empty()
            && current.chars().count() + block.chars().count() + 2 > MESSAGE_LIMIT
        {
            messages.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(&block);
    }
    if !current.is_empty() {
        messages.push(current);
    }
    messages
}

/// Format one announcement as a MarkdownV2 message.
pub fn format_alert(ann: &Announcement) -> String {
    let mut msg = format!(
        "📢 *{}:{}*\n\
        \n\
        🏢 {}\n\
        🗂 {}\n\
        📝 {}\n\
        🕒 `{}`",
        escape_markdown(ann.source().label()),
        escape_markdown(ann.instrument_code()),
        escape_markdown(ann.instrument_name()),
        escape_markdown(&ann.kind_label()),
        escape_markdown(&truncate(ann.subject(), SUBJECT_LIMIT)),
        ann.source_time().format("%Y-%m-%d %H:%M:%S"),
    );
    if !ann.document_url().is_empty() {
        msg.push_str(&format!("\n🔗 {}", escape_markdown(ann.document_url())));
    }
    msg
}

/// Truncate a string with ellipsis (Unicode-safe).
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::announcement;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("hello"), "hello");
        assert_eq!(escape_markdown("hello_world"), "hello\\_world");
        assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
        assert_eq!(escape_markdown("test.com"), "test\\.com");
        assert_eq!(escape_markdown("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 5), "hello...");
        assert_eq!(truncate("ab", 2), "ab");
    }

    #[test]
    fn test_truncate_unicode() {
        assert_eq!(truncate("日本語テスト", 3), "日本語...");
        assert_eq!(truncate("café", 4), "café");
    }

    #[test]
    fn alert_message_escapes_every_field() {
        let msg = format_alert(&announcement("M&M", "Board meeting (Q2)."));

        assert!(msg.starts_with("📢 *NSE:M&M*"));
        assert!(msg.contains("Board meeting \\(Q2\\)\\."));
        assert!(msg.contains("`2026-10-19 10:00:00`"));
        assert!(msg.contains("https://example\\.com/M&M\\.pdf"));
    }

    #[test]
    fn batch_fits_in_one_message_when_small() {
        let alerts = vec![announcement("A", "one"), announcement("B", "two")];
        let messages = format_batch(&alerts);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("*NSE:A*"));
        assert!(messages[0].contains("*NSE:B*"));
    }

    #[test]
    fn large_batch_is_split() {
        let subject = "x".repeat(SUBJECT_LIMIT);
        let alerts: Vec<_> = (0..20)
            .map(|i| announcement(&format!("C{i}"), &subject))
            .collect();
        let messages = format_batch(&alerts);
        assert!(messages.len() > 1);
        assert!(messages.iter().all(|m| m.chars().count() <= MESSAGE_LIMIT));
        assert!(format_batch(&[]).is_empty());
    }
}
