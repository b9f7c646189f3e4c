//! Prompt templates sent to the provider

use crate::domain::models::{AnalysisRequest, ChatRequest};

/// Opening of the personality-analysis prompt, before the posts block.
pub const ANALYSIS_INSTRUCTIONS: &str = "\
You are an AI personality analyzer.

Analyze the following social media posts and describe the user's personality in 3-5 short keywords
that represent their style or vibe (e.g., creative, formal, minimalist, tech-savvy).
Then, suggest exactly one theme name suitable for their web design (e.g., \"dark_minimalist\", \"playful_vibrant\").

Posts:
";

/// Output contract appended after the posts block.
pub const ANALYSIS_OUTPUT_CONTRACT: &str = "
Respond ONLY with a single valid JSON object, with no extra text, no explanation and no markdown code block.
Use this exact structure:

{
  \"personality_tags\": [\"string\", \"string\", \"string\"],
  \"suggested_theme\": \"string\"
}
";

/// Persona placed in front of every chat message.
pub const CHAT_PERSONA: &str = "\
You are LivingProfile AI, a smart assistant that helps users build their personal profile \
by understanding their personality, habits, interests and style. \
Speak in a friendly, intelligent and warm way.

The user is now talking to you:
";

pub fn build_analysis_prompt(request: &AnalysisRequest) -> String {
    let all_posts = request.posts.join("\n");

    let mut prompt = String::with_capacity(
        ANALYSIS_INSTRUCTIONS.len() + all_posts.len() + ANALYSIS_OUTPUT_CONTRACT.len() + 1,
    );
    prompt.push_str(ANALYSIS_INSTRUCTIONS);
    prompt.push_str(&all_posts);
    prompt.push('\n');
    prompt.push_str(ANALYSIS_OUTPUT_CONTRACT);
    prompt
}

/// Persona and user text are flattened into one string; there is no history.
pub fn build_chat_prompt(request: &ChatRequest) -> String {
    format!("{}{}", CHAT_PERSONA, request.message)
}
