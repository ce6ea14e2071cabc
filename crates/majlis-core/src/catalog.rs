//! Fixed reference data: the greetings and vibes shown on the screen.
//!
//! Both tables are `static` and never change after start. Slice order is
//! display order.

use std::str::FromStr;

use serde::Serialize;

use crate::error::MajlisError;

/// Identifier of one of the three vibes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VibeId {
    Classic,
    Warm,
    Modern,
}

impl VibeId {
    /// All vibe ids in display order
    pub const ALL: [VibeId; 3] = [VibeId::Classic, VibeId::Warm, VibeId::Modern];

    /// Stable string form, used as the render key
    pub fn as_str(&self) -> &'static str {
        match self {
            VibeId::Classic => "classic",
            VibeId::Warm => "warm",
            VibeId::Modern => "modern",
        }
    }

    /// The catalog record for this id
    pub fn record(&self) -> &'static VibeRecord {
        // VIBES is indexed in the same order as ALL
        match self {
            VibeId::Classic => &VIBES[0],
            VibeId::Warm => &VIBES[1],
            VibeId::Modern => &VIBES[2],
        }
    }
}

impl std::fmt::Display for VibeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VibeId {
    type Err = MajlisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VibeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| MajlisError::UnknownVibe(s.to_string()))
    }
}

/// CSS class applied to regions that follow the active vibe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccentToken(pub &'static str);

impl AccentToken {
    pub fn as_class(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for AccentToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A named visual/tonal preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VibeRecord {
    pub id: VibeId,
    pub label: &'static str,
    pub caption: &'static str,
    pub accent: AccentToken,
}

/// One dialect's greeting bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetingRecord {
    /// Dialect name, also the render key
    pub dialect: &'static str,
    pub phrase: &'static str,
    pub transliteration: &'static str,
    pub note: &'static str,
}

/// The vibe selected before any interaction
pub const DEFAULT_VIBE: VibeId = VibeId::Warm;

/// Index of the greeting quoted by the share action, whatever vibe is active
pub const SHARED_GREETING_INDEX: usize = 1;

/// Tags printed on every greeting card
pub const CARD_TAGS: [&str; 2] = ["#ترحيب", "#هلا"];

static VIBES: [VibeRecord; 3] = [
    VibeRecord {
        id: VibeId::Classic,
        label: "الترحيب الكلاسيكي",
        caption: "رسمي، أنيق، ويلائم اللقاءات العامة.",
        accent: AccentToken("accent-classic"),
    },
    VibeRecord {
        id: VibeId::Warm,
        label: "الدفء العائلي",
        caption: "أجواء حميمة ومشاعر قريبة من القلب.",
        accent: AccentToken("accent-warm"),
    },
    VibeRecord {
        id: VibeId::Modern,
        label: "الحداثة الرقمية",
        caption: "تحية مرحة لمحبي التكنولوجيا وروح المبادرة.",
        accent: AccentToken("accent-modern"),
    },
];

static GREETINGS: [GreetingRecord; 4] = [
    GreetingRecord {
        dialect: "العربية الفصحى",
        phrase: "مرحبًا بك",
        transliteration: "Marhaban bik",
        note: "مناسبة لكل المواقف وتُشعر الضيف بالاحترام.",
    },
    GreetingRecord {
        dialect: "الخليجية",
        phrase: "هلا وغلا",
        transliteration: "Hala w'ghala",
        note: "تعبير ودود يوحي بحفاوة بالغة وكرم.",
    },
    GreetingRecord {
        dialect: "الشامية",
        phrase: "أهلاً وسهلاً",
        transliteration: "Ahlan wa sahlan",
        note: "تحية مرنة تُستخدم بين الأصدقاء والعائلة.",
    },
    GreetingRecord {
        dialect: "المغاربية",
        phrase: "مرحبا بيك",
        transliteration: "Marhba bik",
        note: "دارجة في شمال أفريقيا وتحمل معاني الألفة.",
    },
];

/// All vibes in display order
pub fn vibes() -> &'static [VibeRecord] {
    &VIBES
}

/// All greetings in display order
pub fn greetings() -> &'static [GreetingRecord] {
    &GREETINGS
}

/// The greeting quoted by the share action
pub fn shared_greeting() -> &'static GreetingRecord {
    &GREETINGS[SHARED_GREETING_INDEX]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vibe_table_matches_id_order() {
        let ids: Vec<VibeId> = vibes().iter().map(|v| v.id).collect();
        assert_eq!(ids, VibeId::ALL.to_vec());
        for id in VibeId::ALL {
            assert_eq!(id.record().id, id);
        }
    }

    #[test]
    fn test_vibe_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for vibe in vibes() {
            assert!(seen.insert(vibe.id.as_str()), "duplicate id {}", vibe.id);
        }
    }

    #[test]
    fn test_default_vibe_is_second_entry() {
        assert_eq!(DEFAULT_VIBE, VibeId::Warm);
        assert_eq!(vibes()[1].id, DEFAULT_VIBE);
    }

    #[test]
    fn test_vibe_id_parse() {
        assert_eq!("classic".parse::<VibeId>().unwrap(), VibeId::Classic);
        assert_eq!("modern".parse::<VibeId>().unwrap(), VibeId::Modern);
        assert!(matches!(
            "Warm".parse::<VibeId>(),
            Err(MajlisError::UnknownVibe(_))
        ));
    }

    #[test]
    fn test_greetings_fixed_set() {
        let dialects: Vec<&str> = greetings().iter().map(|g| g.dialect).collect();
        assert_eq!(
            dialects,
            vec!["العربية الفصحى", "الخليجية", "الشامية", "المغاربية"]
        );
        assert_eq!(shared_greeting().phrase, "هلا وغلا");
    }

    #[test]
    fn test_accent_tokens() {
        assert_eq!(VibeId::Warm.record().accent.as_class(), "accent-warm");
        assert_eq!(VibeId::Classic.record().accent.to_string(), "accent-classic");
    }

    #[test]
    fn test_vibe_id_serializes_lowercase() {
        let json = serde_json::to_string(&VibeId::Modern).unwrap();
        assert_eq!(json, "\"modern\"");
    }
}
