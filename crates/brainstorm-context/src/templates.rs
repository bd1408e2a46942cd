pub const CONTEXT_HEADER: &str = "## SMART CONTEXT ENGINE";

pub const FALLBACK_TOPIC: &str = "discussion";

pub const INSTRUCTIONS: &str = "## INSTRUCTIONS
Respond with insight, not repetition.
Use user's voice and goals.
Be concise, logical, forward-thinking.";

pub const HISTORY_HEADER: &str = "## CONVERSATION HISTORY";
