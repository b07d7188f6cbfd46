// src/config/consts.rs

// Link lists
pub const RUSSELL_GROUP_LINKS: &str =
    "https://raw.githubusercontent.com/Danjones-DJ/Degree-Matchmaker_DJ/refs/heads/main/rusgro_links.csv";
pub const IMPERIAL_LINKS: &str =
    "https://raw.githubusercontent.com/Danjones-DJ/Degree-Matchmaker_DJ/refs/heads/main/imperial_discuni.csv";

// Link list columns
pub const URL_COLUMN: &str = "crseurl";
pub const ID_COLUMN: &str = "kiscourseid";

// Net config
pub const USER_AGENT_PREFIX: &str = "degree_facts/";
pub const RUSSELL_GROUP_TIMEOUT_SECS: u64 = 5;
pub const IMPERIAL_TIMEOUT_SECS: u64 = 15;

// Be polite: fixed pause after every page
pub const RUSSELL_GROUP_PAUSE_MS: u64 = 100;
pub const IMPERIAL_PAUSE_MS: u64 = 1_000;

// Export
pub const RUSSELL_GROUP_OUT_FILE: &str = "rusgro_degree_facts.csv";
pub const IMPERIAL_OUT_FILE: &str = "imperial_results.csv";
