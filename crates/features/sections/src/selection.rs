use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use vinewood_domain::constants::ALL_CATEGORY;

/// Per-request view state for the sections with filters or detail views.
///
/// Carried in the query string (`?jobs=legal&job=cop&gallery=all&image=7`) and
/// never stored. Missing keys mean "all" / "nothing selected"; an `image` that is
/// not a number is treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_id")]
    pub image: Option<u32>,
}

impl Selection {
    pub fn jobs_category(&self) -> &str {
        category_or_all(self.jobs.as_deref())
    }

    pub fn rules_category(&self) -> &str {
        category_or_all(self.rules.as_deref())
    }

    pub fn gallery_category(&self) -> &str {
        category_or_all(self.gallery.as_deref())
    }

    /// Query string (with leading `?`) reproducing this selection; empty when nothing is set.
    pub fn to_query(&self) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(query) if !query.is_empty() => format!("?{query}"),
            Ok(_) => String::new(),
            Err(err) => {
                debug!(%err, "Selection could not be encoded");
                String::new()
            },
        }
    }

    /// Same selection with a different jobs filter; any open job is closed.
    #[must_use]
    pub fn with_jobs(&self, category: &str) -> Self {
        Self { jobs: Some(category.to_owned()), job: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_job(&self, id: Option<&str>) -> Self {
        Self { job: id.map(str::to_owned), ..self.clone() }
    }

    #[must_use]
    pub fn with_rules(&self, category: &str) -> Self {
        Self { rules: Some(category.to_owned()), rule: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_rule(&self, id: Option<&str>) -> Self {
        Self { rule: id.map(str::to_owned), ..self.clone() }
    }

    #[must_use]
    pub fn with_gallery(&self, category: &str) -> Self {
        Self { gallery: Some(category.to_owned()), image: None, ..self.clone() }
    }

    #[must_use]
    pub fn with_image(&self, id: Option<u32>) -> Self {
        Self { image: id, ..self.clone() }
    }
}

/// Parses the `image` id, dropping values that are not a non-negative integer.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            debug!(%value, "Ignoring malformed image selection");
            None
        },
    }))
}

fn category_or_all(value: Option<&str>) -> &str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(ALL_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_category_means_all() {
        let selection = Selection { jobs: Some(" ".into()), rules: Some("combat".into()), ..Selection::default() };
        assert_eq!(selection.jobs_category(), "all");
        assert_eq!(selection.rules_category(), "combat");
        assert_eq!(selection.gallery_category(), "all");
    }

    #[test]
    fn query_round_trip_shape() {
        assert_eq!(Selection::default().to_query(), "");

        let selection = Selection::default().with_gallery("car meets").with_image(Some(7));
        assert_eq!(selection.to_query(), "?gallery=car+meets&image=7");

        let selection = Selection::default().with_jobs("legal & co").with_job(Some("cop"));
        assert_eq!(selection.to_query(), "?jobs=legal+%26+co&job=cop");
    }

    #[test]
    fn query_parses_back() {
        let selection = Selection::default().with_rules("combat").with_rule(Some("rdm"));
        let query = selection.to_query();
        let parsed: Selection = serde_urlencoded::from_str(&query[1..]).unwrap();
        assert_eq!(parsed, selection);
    }

    #[test]
    fn malformed_image_is_ignored() {
        for raw in ["image=abc", "image=", "image=-1", "jobs=legal&image=x"] {
            let parsed: Selection = serde_urlencoded::from_str(raw).unwrap();
            assert_eq!(parsed.image, None, "{raw}");
        }

        let parsed: Selection = serde_urlencoded::from_str("gallery=cars&image=7").unwrap();
        assert_eq!(parsed.image, Some(7));
        assert_eq!(parsed.gallery_category(), "cars");
    }

    #[test]
    fn changing_filter_closes_detail() {
        let selection = Selection::default().with_job(Some("cop")).with_jobs("legal");
        assert_eq!(selection.job, None);
        assert_eq!(selection.jobs.as_deref(), Some("legal"));
    }
}
