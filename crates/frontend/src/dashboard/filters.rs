//! Filter selection for the dashboard query.
//!
//! Every filter is independent. A select holding [`ALL`] and an empty date
//! are left out of the query string entirely.

use contracts::dashboard::FilterOptions;
use serde::Serialize;

/// Select value meaning "do not filter on this column".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Location,
    Post,
    Qualification,
    BusinessEntity,
    Course,
    College,
    StartDate,
    EndDate,
}

impl FilterKey {
    pub const SELECTS: [FilterKey; 6] = [
        FilterKey::Location,
        FilterKey::Post,
        FilterKey::Qualification,
        FilterKey::BusinessEntity,
        FilterKey::Course,
        FilterKey::College,
    ];

    pub const DATES: [FilterKey; 2] = [FilterKey::StartDate, FilterKey::EndDate];

    /// Query-string parameter name.
    pub fn param(&self) -> &'static str {
        match self {
            FilterKey::Location => "location",
            FilterKey::Post => "post",
            FilterKey::Qualification => "qualification",
            FilterKey::BusinessEntity => "business_entity",
            FilterKey::Course => "course",
            FilterKey::College => "college",
            FilterKey::StartDate => "start_date",
            FilterKey::EndDate => "end_date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::Location => "Location",
            FilterKey::Post => "Post",
            FilterKey::Qualification => "Qualification",
            FilterKey::BusinessEntity => "Business Entity",
            FilterKey::Course => "Course",
            FilterKey::College => "College",
            FilterKey::StartDate => "From",
            FilterKey::EndDate => "To",
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, FilterKey::StartDate | FilterKey::EndDate)
    }

    /// Value that leaves this filter inactive.
    pub fn unset_value(&self) -> &'static str {
        if self.is_date() {
            ""
        } else {
            ALL
        }
    }

    /// Choices offered by the server for a select filter.
    pub fn options<'a>(&self, options: &'a FilterOptions) -> &'a [String] {
        match self {
            FilterKey::Location => &options.locations,
            FilterKey::Post => &options.posts,
            FilterKey::Qualification => &options.qualifications,
            FilterKey::BusinessEntity => &options.business_entities,
            FilterKey::Course => &options.courses,
            FilterKey::College => &options.colleges,
            FilterKey::StartDate | FilterKey::EndDate => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    location: String,
    post: String,
    qualification: String,
    business_entity: String,
    course: String,
    college: String,
    start_date: String,
    end_date: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            location: ALL.to_string(),
            post: ALL.to_string(),
            qualification: ALL.to_string(),
            business_entity: ALL.to_string(),
            course: ALL.to_string(),
            college: ALL.to_string(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

/// Serialized shape of the active filters; inactive ones are skipped.
#[derive(Serialize)]
struct FilterQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    post: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    qualification: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    business_entity: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    course: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    college: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<&'a str>,
}

fn active(value: &str) -> Option<&str> {
    if value.is_empty() || value == ALL {
        None
    } else {
        Some(value)
    }
}

impl FilterState {
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Location => &self.location,
            FilterKey::Post => &self.post,
            FilterKey::Qualification => &self.qualification,
            FilterKey::BusinessEntity => &self.business_entity,
            FilterKey::Course => &self.course,
            FilterKey::College => &self.college,
            FilterKey::StartDate => &self.start_date,
            FilterKey::EndDate => &self.end_date,
        }
    }

    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let slot = match key {
            FilterKey::Location => &mut self.location,
            FilterKey::Post => &mut self.post,
            FilterKey::Qualification => &mut self.qualification,
            FilterKey::BusinessEntity => &mut self.business_entity,
            FilterKey::Course => &mut self.course,
            FilterKey::College => &mut self.college,
            FilterKey::StartDate => &mut self.start_date,
            FilterKey::EndDate => &mut self.end_date,
        };
        *slot = value.into();
    }

    /// Selects back to `all`, dates cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn active_count(&self) -> usize {
        FilterKey::SELECTS
            .iter()
            .chain(FilterKey::DATES.iter())
            .filter(|key| active(self.get(**key)).is_some())
            .count()
    }

    /// URL query (without `?`) for `/api/data`.
    pub fn to_query(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(&FilterQuery {
            location: active(&self.location),
            post: active(&self.post),
            qualification: active(&self.qualification),
            business_entity: active(&self.business_entity),
            course: active(&self.course),
            college: active(&self.college),
            start_date: active(&self.start_date),
            end_date: active(&self.end_date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_produces_empty_query() {
        let state = FilterState::default();
        assert_eq!(state.to_query().unwrap(), "");
        assert_eq!(state.active_count(), 0);
    }

    #[test]
    fn only_active_filters_are_sent() {
        let mut state = FilterState::default();
        state.set(FilterKey::Location, "Pune");
        state.set(FilterKey::Course, ALL);
        state.set(FilterKey::StartDate, "2024-01-01");
        state.set(FilterKey::EndDate, "");

        let query = state.to_query().unwrap();
        assert_eq!(query, "location=Pune&start_date=2024-01-01");
        assert_eq!(state.active_count(), 2);
    }

    #[test]
    fn reset_restores_sentinels() {
        let mut state = FilterState::default();
        state.set(FilterKey::College, "IIT");
        state.set(FilterKey::EndDate, "2024-02-01");
        state.reset();
        assert_eq!(state.get(FilterKey::College), ALL);
        assert_eq!(state.get(FilterKey::EndDate), "");
    }

    #[test]
    fn options_map_to_plural_payload_keys() {
        let options = FilterOptions {
            business_entities: vec!["Acme".into()],
            ..Default::default()
        };
        assert_eq!(FilterKey::BusinessEntity.options(&options), ["Acme".to_string()]);
        assert!(FilterKey::StartDate.options(&options).is_empty());
        assert_eq!(FilterKey::BusinessEntity.param(), "business_entity");
        assert_eq!(FilterKey::EndDate.unset_value(), "");
    }
}
