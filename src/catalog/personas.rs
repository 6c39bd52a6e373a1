//! Persona catalog — the 12 personalities offered on the personality
//! phase.

/// One selectable personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    /// Selection value stored under `selection_keys::PERSONALITY`.
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Spoken by the voice preview when the persona is auditioned.
    pub sample_phrase: &'static str,
}

/// All personas, in card order.
pub static PERSONAS: &[Persona] = &[
    Persona {
        id: "friendly_helpful",
        name: "FRIENDLY HELPER",
        tagline: "Warm and supportive",
        sample_phrase: "Hey there! I'm here to help you achieve your goals. Let's make today amazing!",
    },
    Persona {
        id: "professional_serious",
        name: "PROFESSIONAL",
        tagline: "Direct and efficient",
        sample_phrase: "Good day. I'm ready to assist you with your objectives. Let's proceed efficiently.",
    },
    Persona {
        id: "british_refined",
        name: "BRITISH BUTLER",
        tagline: "Refined and courteous",
        sample_phrase: "Good afternoon. It would be my pleasure to assist you today. Shall we begin?",
    },
    Persona {
        id: "whimsical_storyteller",
        name: "STORYTELLER",
        tagline: "Creative and imaginative",
        sample_phrase: "Ah, welcome dear friend! Your journey to greatness begins with a single step...",
    },
    Persona {
        id: "gentle_nurturing",
        name: "GENTLE GUIDE",
        tagline: "Caring and patient",
        sample_phrase: "Hello there. I'm here for you, every step of the way. Take your time.",
    },
    Persona {
        id: "neutral_efficient",
        name: "EFFICIENT",
        tagline: "Neutral and balanced",
        sample_phrase: "System ready. Awaiting your input. How may I assist you today?",
    },
    Persona {
        id: "motivational_coach",
        name: "COACH",
        tagline: "Energetic motivator",
        sample_phrase: "Let's GO! You've got this! Time to crush those goals! Are you ready?!",
    },
    Persona {
        id: "zen_master",
        name: "ZEN MASTER",
        tagline: "Calm and mindful",
        sample_phrase: "Breathe. Center yourself. Together, we shall find harmony in your path.",
    },
    Persona {
        id: "tech_genius",
        name: "TECH GENIUS",
        tagline: "Smart and analytical",
        sample_phrase: "Systems online. All parameters optimized. Ready to compute your success.",
    },
    Persona {
        id: "comedian",
        name: "COMEDIAN",
        tagline: "Witty and fun",
        sample_phrase: "Hey! Did you hear the one about the AI who walked into a bar? Just kidding, let's get to work!",
    },
    Persona {
        id: "therapist",
        name: "THERAPIST",
        tagline: "Understanding listener",
        sample_phrase: "I'm here to listen and support you. How are you feeling today? Let's talk.",
    },
    Persona {
        id: "commander",
        name: "COMMANDER",
        tagline: "Decisive leader",
        sample_phrase: "Attention! Mission objectives are clear. We will succeed. Let's execute the plan.",
    },
];

/// Look up a persona by its selection id.
pub fn find(id: &str) -> Option<&'static Persona> {
    PERSONAS.iter().find(|p| p.id == id)
}
