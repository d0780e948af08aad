use web_sys::{window, UrlSearchParams};

/// The raw `city` parameter of the current page URL, read once at load.
pub fn initial_city() -> Option<String> {
    let search = window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get("city")
}

#[derive(Debug, PartialEq)]
pub struct CitySeed {
    /// Value to write into the form's city field, if the URL supplied one.
    pub seeded: Option<String>,
    /// City the first doctor lookup is issued for.
    pub fetch_city: String,
}

/// Resolves the startup city: a non-empty URL value wins over the form default.
pub fn seed_city(from_query: Option<String>, default_city: &str) -> CitySeed {
    match from_query.filter(|city| !city.is_empty()) {
        Some(city) => CitySeed {
            fetch_city: city.clone(),
            seeded: Some(city),
        },
        None => CitySeed {
            seeded: None,
            fetch_city: default_city.to_string(),
        },
    }
}
