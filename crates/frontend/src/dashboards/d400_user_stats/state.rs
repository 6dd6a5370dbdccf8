use contracts::system::profile::UserProfile;

use crate::shared::components::bar_chart::{layout_bars, Bar, CHART_HEIGHT, CHART_WIDTH};

/// Load state of the profile shown on the home dashboard
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    #[default]
    Loading,
    Loaded(UserProfile),
    Failed(String),
}

impl ProfileState {
    pub fn from_result<E: std::fmt::Display>(result: Result<UserProfile, E>) -> Self {
        match result {
            Ok(profile) => ProfileState::Loaded(profile),
            Err(e) => ProfileState::Failed(e.to_string()),
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            ProfileState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    /// Chart geometry; empty until the profile is loaded
    pub fn bars(&self) -> Vec<Bar> {
        let Some(profile) = self.profile() else {
            return Vec::new();
        };
        let data: Vec<(&str, u64)> = UserProfile::STAT_LABELS
            .iter()
            .copied()
            .zip(profile.stats())
            .collect();
        layout_bars(&data, CHART_WIDTH, CHART_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetch_keeps_message() {
        let state = ProfileState::from_result::<&str>(Err("HTTP 500: boom"));
        assert_eq!(state, ProfileState::Failed("HTTP 500: boom".into()));
        assert!(state.bars().is_empty());
        assert_eq!(ProfileState::default(), ProfileState::Loading);
    }

    #[test]
    fn loaded_profile_charts_stats_in_order() {
        let profile = UserProfile {
            name: "editor".into(),
            art_count: 8,
            follow_count: 2,
            fans_count: 4,
            like_count: 0,
            ..Default::default()
        };
        let state = ProfileState::from_result::<String>(Ok(profile));
        let bars = state.bars();
        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Articles", "Following", "Followers", "Likes"]);
        assert!(bars[0].height > bars[2].height);
        assert!(bars[2].height > bars[1].height);
        assert_eq!(bars[3].height, 0.0);
    }
}
