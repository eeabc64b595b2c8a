// Content enhancement: one LLM rewrite of the prose fields, with a
// deterministic fallback whenever the call or its reply is unusable.
// All LLM calls go through llm_client.

pub mod enhancer;
pub mod handlers;
pub mod prompts;
