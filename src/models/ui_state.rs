use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Insights panel tab. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Map,
    Impact,
    Leaderboard,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Map, Tab::Impact, Tab::Leaderboard];

    /// Identifier used in URLs and `data-tab` attributes.
    pub fn slug(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Map => "map",
            Tab::Impact => "impact",
            Tab::Leaderboard => "leaderboard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Map => "Map View",
            Tab::Impact => "Environmental Impact",
            Tab::Leaderboard => "Leaderboard",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Overview => "icon-bar-chart",
            Tab::Map => "icon-map",
            Tab::Impact => "icon-leaf",
            Tab::Leaderboard => "icon-trophy",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab '{}'", self.0)
    }
}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Raw `/dashboard` query parameters, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
    pub menu: Option<String>,
}

/// Local view state of the dashboard.
///
/// `menu_open` and `active_tab` are independent; transitions are total and
/// carry no guards. The state lives in the page URL, never on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UiState {
    pub menu_open: bool,
    pub active_tab: Tab,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// State reached by clicking the menu toggle.
    pub fn with_menu_toggled(self) -> Self {
        let mut next = self;
        next.toggle_menu();
        next
    }

    /// State reached by clicking a tab button.
    pub fn with_tab(self, tab: Tab) -> Self {
        let mut next = self;
        next.select_tab(tab);
        next
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    /// Dashboard URL encoding this state.
    pub fn href(&self) -> String {
        if self.menu_open {
            format!("/dashboard?tab={}&menu=open", self.active_tab)
        } else {
            format!("/dashboard?tab={}", self.active_tab)
        }
    }

    /// Unknown tab values fall back to the overview; a missing or
    /// unrecognised `menu` value means closed.
    pub fn from_query(query: &DashboardQuery) -> Self {
        let active_tab = match query.tab.as_deref() {
            None => Tab::default(),
            Some(raw) => raw.parse::<Tab>().unwrap_or_else(|e| {
                log::warn!("{e}, falling back to {}", Tab::default());
                Tab::default()
            }),
        };
        let menu_open = query.menu.as_deref() == Some("open");
        Self { menu_open, active_tab }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(tab: Option<&str>, menu: Option<&str>) -> DashboardQuery {
        DashboardQuery {
            tab: tab.map(String::from),
            menu: menu.map(String::from),
        }
    }

    #[test]
    fn initial_state() {
        let state = UiState::new();
        assert!(!state.menu_open);
        assert_eq!(state.active_tab, Tab::Overview);
    }

    #[test]
    fn double_toggle_restores_menu() {
        for start in [false, true] {
            let mut state = UiState { menu_open: start, active_tab: Tab::Impact };
            state.toggle_menu();
            assert_ne!(state.menu_open, start);
            state.toggle_menu();
            assert_eq!(state.menu_open, start);
            assert_eq!(state.active_tab, Tab::Impact);
        }
    }

    #[test]
    fn every_tab_reachable_from_every_tab() {
        for from in Tab::ALL {
            for to in Tab::ALL {
                let state = UiState { menu_open: true, active_tab: from }.with_tab(to);
                assert_eq!(state.active_tab, to);
                assert!(state.menu_open);
            }
        }
    }

    #[test]
    fn parses_slugs() {
        assert_eq!("map".parse::<Tab>(), Ok(Tab::Map));
        assert_eq!(" Leaderboard ".parse::<Tab>(), Ok(Tab::Leaderboard));
        assert_eq!("stats".parse::<Tab>(), Err(UnknownTab("stats".into())));
    }

    #[test]
    fn href_round_trips_through_query() {
        for tab in Tab::ALL {
            for menu_open in [false, true] {
                let state = UiState { menu_open, active_tab: tab };
                let href = state.href();
                let qs = href.split_once('?').map(|(_, q)| q).unwrap_or_default();
                let mut q = DashboardQuery::default();
                for pair in qs.split('&') {
                    match pair.split_once('=') {
                        Some(("tab", v)) => q.tab = Some(v.to_string()),
                        Some(("menu", v)) => q.menu = Some(v.to_string()),
                        _ => {}
                    }
                }
                assert_eq!(UiState::from_query(&q), state);
            }
        }
    }

    #[test]
    fn unknown_tab_falls_back_to_overview() {
        let state = UiState::from_query(&query(Some("settings"), Some("open")));
        assert_eq!(state.active_tab, Tab::Overview);
        assert!(state.menu_open);
    }

    #[test]
    fn menu_value_other_than_open_is_closed() {
        assert!(!UiState::from_query(&query(Some("map"), Some("closed"))).menu_open);
        assert!(!UiState::from_query(&query(None, None)).menu_open);
    }
}
