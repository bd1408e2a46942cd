use brainstorm_context::{build_context, extract_keywords, INSTRUCTIONS};
use brainstorm_llm::Message;

fn conversation() -> Vec<Message> {
    vec![
        Message::user("I want a plan for the memory system"),
        Message::assistant("Start with the context window and a clear goal"),
        Message::user("What about the AI model itself?"),
    ]
}

#[test]
fn test_context_has_all_sections_in_order() {
    let context = build_context(&conversation());
    let lines: Vec<&str> = context.lines().collect();

    assert_eq!(lines[0], "## SMART CONTEXT ENGINE");
    assert_eq!(lines[1], "Topics: context, goal, memory, model, plan, system");
    assert_eq!(lines[2], "Conversation with 3 messages. Roles: user, assistant.");
    assert!(context.contains(INSTRUCTIONS));

    let history = context
        .split("## CONVERSATION HISTORY\n")
        .nth(1)
        .expect("history section present");
    assert_eq!(
        history,
        "user: I want a plan for the memory system\n\
         assistant: Start with the context window and a clear goal\n\
         user: What about the AI model itself?"
    );
}

#[test]
fn test_every_message_kept_in_order() {
    let messages: Vec<Message> = (0..25)
        .map(|i| {
            if i % 2 == 0 {
                Message::user(format!("turn {}", i))
            } else {
                Message::new("critic", format!("turn {}", i))
            }
        })
        .collect();

    let context = build_context(&messages);
    assert!(context.contains("Conversation with 25 messages. Roles: user, critic."));

    let mut cursor = 0;
    for message in &messages {
        let line = format!("\n{}: {}", message.role, message.content);
        let found = context[cursor..]
            .find(&line)
            .unwrap_or_else(|| panic!("missing or out of order: {}", line));
        cursor += found + line.len();
    }
}

#[test]
fn test_empty_conversation() {
    let context = build_context(&[]);

    assert!(context.contains("\nTopics: discussion\n"));
    assert!(context.contains("Conversation with 0 messages. Roles: none."));
    assert!(context.ends_with("## CONVERSATION HISTORY\n"));
}

#[test]
fn test_no_vocabulary_match_falls_back() {
    let context = build_context(&[Message::user("let us chat about lunch")]);
    assert!(context.contains("\nTopics: discussion\n"));
}

#[test]
fn test_content_is_not_case_folded_in_transcript() {
    let context = build_context(&[Message::user("The MODEL Is Great")]);
    assert!(context.contains("Topics: model"));
    assert!(context.contains("user: The MODEL Is Great"));
}

#[test]
fn test_keyword_extraction_is_idempotent() {
    let text = "Brainstorm a query, then a response: token logic, thought memory.";
    let first = extract_keywords(text);
    let second = extract_keywords(text);

    assert_eq!(first, second);
    assert_eq!(first.len(), 7);
}

#[test]
fn test_ai_model_context_example() {
    let keywords = extract_keywords("AI model context");
    assert!(keywords.contains("model"));
    assert!(keywords.contains("context"));
    assert!(!keywords.contains("chat"));
}

#[test]
fn test_same_input_same_context() {
    assert_eq!(build_context(&conversation()), build_context(&conversation()));
}
