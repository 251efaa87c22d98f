use crate::auth::session::SessionProvider;
use crate::format::{format_date, format_long_date};
use crate::metrics::MetricsSource;

use super::alert::Alert;
use super::chart::{CHART_HEIGHT, CHART_WIDTH, ChartLayout};
use super::ui_state::{Tab, UiState};
use super::user::UserProfile;
use super::waste::{SummaryTile, summary_tiles};

// ---------- Types ----------

/// Navigation bar: brand, logout and the mobile menu toggle.
#[derive(Debug, Clone)]
pub struct SessionHeader {
    pub brand: String,
    pub menu_open: bool,
    /// Link to the same page with the menu flag flipped.
    pub menu_toggle_href: String,
}

impl SessionHeader {
    pub fn toggle_label(&self) -> &'static str {
        if self.menu_open { "Close menu" } else { "Open menu" }
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.menu_open { "✕" } else { "☰" }
    }
}

/// Profile card fields, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub email: String,
    pub joined: String,
    pub last_login: String,
}

impl ProfileCard {
    pub fn from_user(user: &UserProfile) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            joined: format_long_date(&user.created_at),
            last_login: format_date(&user.last_login),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabLink {
    pub tab: Tab,
    pub href: String,
    pub active: bool,
}

impl TabLink {
    pub fn label(&self) -> &'static str {
        self.tab.label()
    }

    pub fn slug(&self) -> &'static str {
        self.tab.slug()
    }

    pub fn icon(&self) -> &'static str {
        self.tab.icon()
    }
}

#[derive(Debug, Clone)]
pub struct OverviewPanel {
    pub tiles: Vec<SummaryTile>,
    pub chart: ChartLayout,
}

#[derive(Debug, Clone)]
pub struct PlaceholderPanel {
    pub tab: Tab,
}

impl PlaceholderPanel {
    pub fn slug(&self) -> &'static str {
        self.tab.slug()
    }

    pub fn text(&self) -> String {
        format!("{} Placeholder", self.tab.label())
    }
}

/// Content of the active tab. Only one variant exists per render, so only
/// one block can ever be shown.
#[derive(Debug, Clone)]
pub enum TabContent {
    Overview(OverviewPanel),
    Placeholder(PlaceholderPanel),
}

impl TabContent {
    pub fn for_tab(tab: Tab, metrics: &dyn MetricsSource) -> Self {
        match tab {
            Tab::Overview => {
                let samples = metrics.samples();
                TabContent::Overview(OverviewPanel {
                    tiles: summary_tiles(&samples),
                    chart: ChartLayout::build(&samples, CHART_WIDTH, CHART_HEIGHT),
                })
            }
            Tab::Map | Tab::Impact | Tab::Leaderboard => {
                TabContent::Placeholder(PlaceholderPanel { tab })
            }
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            TabContent::Overview(_) => Tab::Overview,
            TabContent::Placeholder(p) => p.tab,
        }
    }

    pub fn overview(&self) -> Option<&OverviewPanel> {
        match self {
            TabContent::Overview(panel) => Some(panel),
            TabContent::Placeholder(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&PlaceholderPanel> {
        match self {
            TabContent::Placeholder(panel) => Some(panel),
            TabContent::Overview(_) => None,
        }
    }
}

/// Everything the dashboard template shows, derived from the session user,
/// the metrics source and the current UI state.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub ui: UiState,
    pub header: SessionHeader,
    /// `None` when the session holds no user; the card renders a placeholder.
    pub profile: Option<ProfileCard>,
    pub alerts: Vec<Alert>,
    pub tabs: Vec<TabLink>,
    pub content: TabContent,
}

impl DashboardView {
    pub fn build(
        brand: &str,
        session: &dyn SessionProvider,
        metrics: &dyn MetricsSource,
        ui: UiState,
    ) -> Self {
        let header = SessionHeader {
            brand: brand.to_string(),
            menu_open: ui.menu_open,
            menu_toggle_href: ui.with_menu_toggled().href(),
        };

        let profile = session.current_user().as_ref().map(ProfileCard::from_user);

        let tabs = Tab::ALL
            .iter()
            .map(|&tab| TabLink {
                tab,
                href: ui.with_tab(tab).href(),
                active: ui.is_active(tab),
            })
            .collect();

        Self {
            ui,
            header,
            profile,
            alerts: metrics.alerts(),
            tabs,
            content: TabContent::for_tab(ui.active_tab, metrics),
        }
    }
}

/// Ends the session behind the logout buttons. Calls the store exactly once;
/// whatever the store does on failure stays with the store.
pub fn end_session(session: &dyn SessionProvider) {
    session.logout();
}
