//! Static copy shown around the carousel: FAQ and the festival's history.

use serde::Serialize;

pub const FESTIVAL_NAME: &str = "Avenir";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub side: TimelineSide,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What kind of events can I expect from Avenir?",
        answer: "Since Phoenix has various wings for gaming, public speaking, coding, photography, robotics, etc. events from multiple domains will be there with added bonuses in the form of flagship events.",
    },
    FaqEntry {
        question: "Will I get any certificates upon participating in Avenir?",
        answer: "Yes, a participation certificate will be provided and there will be cash prizes for winners.",
    },
    FaqEntry {
        question: "How to register for Avenir?",
        answer: "You can Register for Avenir from the official website. The registration fees will be mentioned for each event. Phoenix members do not have to pay any registration fees for any event in Avenir.",
    },
    FaqEntry {
        question: "How can I stay updated with notices regarding Avenir?",
        answer: "Keep following Phoenix instagram ( @phoenix_nsec) to stay updated with all the crazy and cool information regarding Avenir.",
    },
    FaqEntry {
        question: "How is Avenir different from other techno management fests in Kolkata?",
        answer: "Not only Avenir is one of the oldest of techno management fests but also it offers a huge variety of events to participate in.",
    },
];

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: "2015",
        title: "Humble Beginnings",
        description: "Avenir started a small departmental initiative with 200+ participants. Driven by passion and curiosity, it laid the foundation of a culture based on innovation and collaboration.",
        side: TimelineSide::Left,
    },
    Milestone {
        year: "2018",
        title: "Going College-Wide",
        description: "The event expanded to include all departments crossing 1000+ participants. It transformed from a small initiative to a unified celebration of technology and innovation.",
        side: TimelineSide::Right,
    },
    Milestone {
        year: "2020",
        title: "Virtual Innovation",
        description: "Amid the pandemic, Avenir successfully transitioned into a fully virtual event. This shift proved its adaptability while maintaining the same standard of learning, competition and engagement.",
        side: TimelineSide::Left,
    },
    Milestone {
        year: "2023",
        title: "National Recognition",
        description: "Avenir grew into one of Kolkata's premier technical festivals. With wider participation and bolder partnerships, it earned national level recognition.",
        side: TimelineSide::Right,
    },
    Milestone {
        year: "2026",
        title: "Better than Ever",
        description: "Avenir'26 brings a promise of excitement, high octane events, that compels willing participants to rack their brains and navigate through the streets of Avenir City. With students from over 50+ different institutions spanning across Kolkata, this is the moment to win it all.",
        side: TimelineSide::Left,
    },
];
