//! # Team Catalog
//!
//! Static city -> team mapping plus the traits each team is known for.
//! Immutable once handed to the engine.

use std::collections::HashMap;

use super::{Style, TeamCode};

/// Color used when a team has no entry in the color table
pub const FALLBACK_COLOR: &str = "blue";

/// Style used when a team has no entry in the style table
pub const FALLBACK_STYLE: Style = Style::Balanced;

/// Colors the questionnaire UI offers at step 2
const OFFERED_COLORS: [&str; 5] = ["red", "yellow", "blue", "purple", "green"];

/// City/team/trait tables
#[derive(Debug, Clone, Default)]
pub struct TeamCatalog {
    /// (city, team) in insertion order
    cities: Vec<(String, TeamCode)>,

    /// Preferred color per team
    colors: HashMap<TeamCode, String>,

    /// Preferred batting style per team
    styles: HashMap<TeamCode, Style>,
}

impl TeamCatalog {
    /// Empty catalog; populate with `with_city` / `with_traits`
    pub fn new() -> Self {
        Self::default()
    }

    /// The five-franchise catalog the storefront ships with
    pub fn ipl() -> Self {
        Self::new()
            .with_city("Bangalore", "RCB")
            .with_city("Chennai", "CSK")
            .with_city("Mumbai", "MI")
            .with_city("Kolkata", "KKR")
            .with_city("Delhi", "DC")
            .with_traits("RCB", "red", Style::Aggressive)
            .with_traits("CSK", "yellow", Style::Balanced)
            .with_traits("MI", "blue", Style::Aggressive)
            .with_traits("KKR", "purple", Style::Balanced)
            .with_traits("DC", "blue", Style::Aggressive)
    }

    /// Map a city to a team. Re-adding a city replaces its team in place.
    pub fn with_city(mut self, city: impl Into<String>, team: impl Into<TeamCode>) -> Self {
        let city = city.into();
        let team = team.into();
        match self.cities.iter_mut().find(|(c, _)| *c == city) {
            Some(entry) => entry.1 = team,
            None => self.cities.push((city, team)),
        }
        self
    }

    /// Set the preferred color and style of a team
    pub fn with_traits(
        mut self,
        team: impl Into<TeamCode>,
        color: impl Into<String>,
        style: Style,
    ) -> Self {
        let team = team.into();
        self.colors.insert(team.clone(), color.into());
        self.styles.insert(team, style);
        self
    }

    pub fn team_for_city(&self, city: &str) -> Option<&TeamCode> {
        self.cities
            .iter()
            .find(|(c, _)| c == city)
            .map(|(_, team)| team)
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.team_for_city(city).is_some()
    }

    /// Preferred color, falling back to "blue"
    pub fn preferred_color(&self, team: &TeamCode) -> &str {
        self.colors
            .get(team)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Preferred style, falling back to balanced
    pub fn preferred_style(&self, team: &TeamCode) -> Style {
        self.styles.get(team).copied().unwrap_or(FALLBACK_STYLE)
    }

    /// Cities in insertion order
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(|(c, _)| c.as_str())
    }

    /// Distinct team codes, first-seen order.
    /// This is the population the random fallback draws from.
    pub fn team_codes(&self) -> Vec<TeamCode> {
        let mut codes: Vec<TeamCode> = Vec::with_capacity(self.cities.len());
        for (_, team) in &self.cities {
            if !codes.contains(team) {
                codes.push(team.clone());
            }
        }
        codes
    }

    /// Colors offered by the questionnaire UI. The engine accepts any color.
    pub fn offered_colors(&self) -> &'static [&'static str] {
        &OFFERED_COLORS
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipl_city_mapping() {
        let catalog = TeamCatalog::ipl();

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.team_for_city("Chennai"), Some(&TeamCode::new("CSK")));
        assert_eq!(catalog.team_for_city("Delhi"), Some(&TeamCode::new("DC")));
        assert_eq!(catalog.team_for_city("Pune"), None);
        assert!(!catalog.contains_city("chennai"));
    }

    #[test]
    fn test_ipl_traits_cover_every_team() {
        let catalog = TeamCatalog::ipl();

        for team in catalog.team_codes() {
            assert!(catalog.colors.contains_key(&team), "no color for {}", team);
            assert!(catalog.styles.contains_key(&team), "no style for {}", team);
        }

        assert_eq!(catalog.preferred_color(&"KKR".into()), "purple");
        assert_eq!(catalog.preferred_style(&"RCB".into()), Style::Aggressive);
    }

    #[test]
    fn test_team_codes_order() {
        let codes = TeamCatalog::ipl().team_codes();
        let codes: Vec<&str> = codes.iter().map(TeamCode::as_str).collect();
        assert_eq!(codes, vec!["RCB", "CSK", "MI", "KKR", "DC"]);
    }

    #[test]
    fn test_fallback_traits() {
        let catalog = TeamCatalog::new().with_city("Jaipur", "RR");
        let rr = TeamCode::new("RR");

        assert_eq!(catalog.preferred_color(&rr), FALLBACK_COLOR);
        assert_eq!(catalog.preferred_style(&rr), FALLBACK_STYLE);
    }

    #[test]
    fn test_shared_team_listed_once() {
        let catalog = TeamCatalog::new()
            .with_city("Mumbai", "MI")
            .with_city("Navi Mumbai", "MI")
            .with_city("Delhi", "DC");

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.team_codes().len(), 2);
    }

    #[test]
    fn test_with_city_replaces() {
        let catalog = TeamCatalog::new()
            .with_city("Delhi", "DD")
            .with_city("Delhi", "DC");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.team_for_city("Delhi"), Some(&TeamCode::new("DC")));
    }

    #[test]
    fn test_offered_colors() {
        let catalog = TeamCatalog::ipl();
        assert_eq!(catalog.offered_colors().len(), 5);
        assert!(catalog.offered_colors().contains(&"green"));
    }
}
