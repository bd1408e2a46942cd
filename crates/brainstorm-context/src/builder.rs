use brainstorm_llm::Message;

use crate::keywords::extract_keywords;
use crate::templates::{CONTEXT_HEADER, FALLBACK_TOPIC, HISTORY_HEADER, INSTRUCTIONS};

/// Build the prompt sent to every provider for one request.
///
/// Layout, one section per line group:
///
/// ```text
/// ## SMART CONTEXT ENGINE
/// Topics: context, model
/// Conversation with 2 messages. Roles: user, assistant.
/// ## INSTRUCTIONS
/// ...
/// ## CONVERSATION HISTORY
/// user: ...
/// assistant: ...
/// ```
///
/// Never fails; an empty conversation yields the fallback topic and a
/// zero-message summary.
pub fn build_context(messages: &[Message]) -> String {
    let full_text = messages
        .iter()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let keywords = extract_keywords(&full_text);
    let topics = if keywords.is_empty() {
        format!("Topics: {}", FALLBACK_TOPIC)
    } else {
        format!("Topics: {}", keywords.into_iter().collect::<Vec<_>>().join(", "))
    };

    let summary = format!(
        "Conversation with {} messages. Roles: {}.",
        messages.len(),
        distinct_roles(messages)
    );

    let transcript = messages
        .iter()
        .map(Message::transcript_line)
        .collect::<Vec<_>>()
        .join("\n");

    [
        CONTEXT_HEADER,
        topics.as_str(),
        summary.as_str(),
        INSTRUCTIONS,
        HISTORY_HEADER,
        transcript.as_str(),
    ]
    .join("\n")
}

/// Roles in order of first appearance
fn distinct_roles(messages: &[Message]) -> String {
    let mut roles: Vec<&str> = Vec::new();
    for message in messages {
        if !roles.contains(&message.role.as_str()) {
            roles.push(&message.role);
        }
    }

    if roles.is_empty() {
        "none".to_string()
    } else {
        roles.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_roles_first_seen_order() {
        let messages = vec![
            Message::assistant("hi"),
            Message::user("hello"),
            Message::assistant("again"),
        ];
        assert_eq!(distinct_roles(&messages), "assistant, user");
    }

    #[test]
    fn test_distinct_roles_empty() {
        assert_eq!(distinct_roles(&[]), "none");
    }
}
