use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive category match; takes precedence over `featured`.
    pub category: Option<String>,
    /// `true` restricts the list to featured products; any other value is ignored.
    pub featured: Option<String>,
}

impl ProductQuery {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn featured_only(&self) -> bool {
        self.featured.as_deref() == Some("true")
    }
}
