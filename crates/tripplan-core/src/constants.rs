//! TripPlan centralized constants.
//! Prompt text, defaults, and limits live here.

// ─── Conversation ─────────────────────────────────────────────────────────────

pub mod conversation {
    /// Fixed persona, always at log index 0.
    pub const SYSTEM_PERSONA: &str = "You are an AI travel planner that creates detailed itineraries and responds to follow-up questions and modifications.";

    /// Opening assistant turn, always at log index 1.
    pub const GREETING: &str =
        "Hello! I am your AI Travel Planner. Fill out the form above to create your first itinerary.";

    /// Number of messages every log starts with (persona + greeting).
    pub const BASE_LEN: usize = 2;

    /// Shown when a history entry cannot be resolved.
    pub const UNAVAILABLE: &str = "No data available.";

    /// Trailing messages sent with a follow-up request.
    pub const FOLLOW_UP_WINDOW: usize = 4;
}

// ─── Trip Form ────────────────────────────────────────────────────────────────

pub mod trip {
    pub const MIN_BUDGET: u64 = 500;
    pub const MIN_TRAVELERS: u32 = 1;

    /// Sections every generated itinerary must cover, in prompt order.
    pub const ITINERARY_SECTIONS: &[&str] = &[
        "Transportation between locations",
        "Accommodation suggestions",
        "Key attractions each day",
        "Estimated costs for main activities",
        "Local cuisine recommendations",
        "Practical tips",
    ];
}

// ─── Models & Endpoints ───────────────────────────────────────────────────────

pub mod models {
    pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";
}

pub mod endpoints {
    pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai";
    pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
}

pub mod env {
    pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";
}

// ─── Timeouts ─────────────────────────────────────────────────────────────────

pub mod timeouts {
    /// Upper bound on a single completion request, in seconds.
    pub const LLM_REQUEST_SECS: u64 = 120;
}

// ─── Storage Paths ────────────────────────────────────────────────────────────

pub mod paths {
    pub const CONFIG_DIR: &str = "tripplan";
    pub const CONFIG_FILE: &str = "config.toml";
}
