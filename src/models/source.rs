use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Conversational-AI service a transcript was exported from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiSource {
    Claude,
    Gemini,
    Grok,
    Gpt,
}

/// Organizational label assigned to a source, used for display grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpertRole {
    /// Never assigned by ingestion; kept so archives and configs can name it.
    Secretary,
    Cto,
    Marketing,
    Admin,
    Pr,
}

/// Static per-source configuration shared by ingestion and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceProfile {
    pub source: AiSource,
    pub name: &'static str,
    pub icon: &'static str,
    pub role: ExpertRole,
    pub role_label: &'static str,
    pub url: &'static str,
}

const PROFILES: [SourceProfile; 4] = [
    SourceProfile {
        source: AiSource::Claude,
        name: "Claude",
        icon: "🟣",
        role: ExpertRole::Cto,
        role_label: "CTO",
        url: "https://claude.ai",
    },
    SourceProfile {
        source: AiSource::Gemini,
        name: "Gemini",
        icon: "🔵",
        role: ExpertRole::Admin,
        role_label: "총무",
        url: "https://gemini.google.com",
    },
    SourceProfile {
        source: AiSource::Grok,
        name: "Grok",
        icon: "⚫",
        role: ExpertRole::Marketing,
        role_label: "마케팅",
        url: "https://grok.x.ai",
    },
    SourceProfile {
        source: AiSource::Gpt,
        name: "GPT",
        icon: "🟢",
        role: ExpertRole::Pr,
        role_label: "홍보",
        url: "https://chatgpt.com",
    },
];

impl AiSource {
    /// All sources in dashboard order
    pub const ALL: [AiSource; 4] = [AiSource::Claude, AiSource::Gemini, AiSource::Grok, AiSource::Gpt];

    /// Choices offered when picking the secretary, in picker order
    pub const SECRETARY_OPTIONS: [AiSource; 4] =
        [AiSource::Claude, AiSource::Gemini, AiSource::Gpt, AiSource::Grok];

    pub fn profile(self) -> &'static SourceProfile {
        match self {
            AiSource::Claude => &PROFILES[0],
            AiSource::Gemini => &PROFILES[1],
            AiSource::Grok => &PROFILES[2],
            AiSource::Gpt => &PROFILES[3],
        }
    }

    pub fn role(self) -> ExpertRole {
        self.profile().role
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AiSource::Claude => "claude",
            AiSource::Gemini => "gemini",
            AiSource::Grok => "grok",
            AiSource::Gpt => "gpt",
        }
    }

    /// Next source in dashboard order, wrapping around
    pub fn next(self) -> AiSource {
        let idx = AiSource::ALL.iter().position(|s| *s == self).unwrap_or(0);
        AiSource::ALL[(idx + 1) % AiSource::ALL.len()]
    }
}

impl fmt::Display for AiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "claude" => Ok(AiSource::Claude),
            "gemini" => Ok(AiSource::Gemini),
            "grok" => Ok(AiSource::Grok),
            "gpt" | "chatgpt" => Ok(AiSource::Gpt),
            other => Err(format!("unknown AI source '{}' (expected claude, gemini, grok or gpt)", other)),
        }
    }
}

impl ExpertRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpertRole::Secretary => "secretary",
            ExpertRole::Cto => "cto",
            ExpertRole::Marketing => "marketing",
            ExpertRole::Admin => "admin",
            ExpertRole::Pr => "pr",
        }
    }
}

impl fmt::Display for ExpertRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
