use log::Level;

pub const DOCTORS_ENDPOINT: &str = "https://api.practo.com/doctors/";
pub const TESTIMONIALS_ENDPOINT: &str = "https://api.example.com/testimonials";

/// Below this age the physiotherapy question is hidden and its answer cleared on submit.
pub const PHYSIO_AGE_THRESHOLD: i64 = 40;

pub const SUBMIT_ERROR_MESSAGE: &str = "Error submitting form. Please try again later.";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn doctors_url(city: &str) -> String {
    format!("{}?city={}", DOCTORS_ENDPOINT, urlencoding::encode(city))
}
