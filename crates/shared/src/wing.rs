//! Wing (sub-club) attribution for events, used only for the card badge.

use crate::domain::EventId;

pub const DEFAULT_WING: &str = "General";

const FESTIVAL_WINGS: &[(&str, &[&str])] = &[
    ("Robonix", &[]),
    ("Eloquense", &["EVT00002"]),
    ("Cybernix", &[]),
    ("Virtuix", &["EVT00003"]),
    ("Illustro", &["EVT00004"]),
    ("Fun", &["EVT00001"]),
];

/// Ordered wing -> event ids mapping. Lookups return the first wing in
/// declaration order that claims an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WingDirectory {
    wings: Vec<(String, Vec<EventId>)>,
}

impl WingDirectory {
    pub fn new() -> Self {
        Self { wings: Vec::new() }
    }

    pub fn with_wing<I, S>(mut self, wing: impl Into<String>, event_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wings.push((
            wing.into(),
            event_ids.into_iter().map(|id| EventId(id.into())).collect(),
        ));
        self
    }

    pub fn label_for(&self, event_id: &EventId) -> &str {
        self.wings
            .iter()
            .find(|(_, ids)| ids.contains(event_id))
            .map(|(wing, _)| wing.as_str())
            .unwrap_or(DEFAULT_WING)
    }

    pub fn wings(&self) -> impl Iterator<Item = &str> {
        self.wings.iter().map(|(wing, _)| wing.as_str())
    }
}

impl Default for WingDirectory {
    fn default() -> Self {
        FESTIVAL_WINGS
            .iter()
            .fold(Self::new(), |directory, (wing, ids)| {
                directory.with_wing(*wing, ids.iter().copied())
            })
    }
}

/// Badge label for `event_id` under the festival's own wing map.
pub fn wing_label(event_id: &EventId) -> &'static str {
    FESTIVAL_WINGS
        .iter()
        .find(|(_, ids)| ids.contains(&event_id.as_str()))
        .map(|(wing, _)| *wing)
        .unwrap_or(DEFAULT_WING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn festival_map_labels_known_events() {
        assert_eq!(wing_label(&EventId::from("EVT00001")), "Fun");
        assert_eq!(wing_label(&EventId::from("EVT00002")), "Eloquense");
        assert_eq!(wing_label(&EventId::from("EVT00004")), "Illustro");
    }

    #[test]
    fn unknown_event_falls_back_to_general() {
        assert_eq!(wing_label(&EventId::from("EVT99999")), DEFAULT_WING);
        assert_eq!(
            WingDirectory::default().label_for(&EventId::from("nope")),
            DEFAULT_WING
        );
    }

    #[test]
    fn default_directory_matches_static_lookup() {
        let directory = WingDirectory::default();
        for id in ["EVT00001", "EVT00002", "EVT00003", "EVT00004", "EVT00005"] {
            let id = EventId::from(id);
            assert_eq!(directory.label_for(&id), wing_label(&id));
        }
        assert_eq!(directory.wings().count(), 6);
    }

    #[test]
    fn first_declared_wing_wins_on_shared_ids() {
        let directory = WingDirectory::new()
            .with_wing("Cybernix", ["EVT7"])
            .with_wing("Robonix", ["EVT7", "EVT8"]);
        assert_eq!(directory.label_for(&EventId::from("EVT7")), "Cybernix");
        assert_eq!(directory.label_for(&EventId::from("EVT8")), "Robonix");
    }
}
