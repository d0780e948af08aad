use gloo_net::http::Request;
use log::info;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config;
use crate::models::{Doctor, Testimonial};

#[derive(Error, Debug)]
pub enum ApiError {
    /// Network failures and bodies that do not decode.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("server responded with status {0}")]
    Status(u16),
}

pub type Result<T> = std::result::Result<T, ApiError>;

pub async fn fetch_doctors(city: &str) -> Result<Vec<Doctor>> {
    get_json(&config::doctors_url(city)).await
}

pub async fn fetch_testimonials() -> Result<Vec<Testimonial>> {
    get_json(config::TESTIMONIALS_ENDPOINT).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    info!("GET {}", url);
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_doctor_payload_verbatim() {
        let doctors: Vec<Doctor> = serde_json::from_str(
            r#"[{"name":"Dr. Mehta","expertise":"Orthopaedics","city":"Pune"},
                {"name":"Dr. Mehta","expertise":"Sports injuries","city":"Pune"}]"#,
        )
        .unwrap();
        assert_eq!(doctors.len(), 2);
        assert_eq!(doctors[1].expertise, "Sports injuries");
    }

    #[test]
    fn decodes_testimonial_payload() {
        let testimonials: Vec<Testimonial> =
            serde_json::from_str(r#"[{"id":1,"quote":"Great","author":"A"}]"#).unwrap();
        assert_eq!(
            testimonials,
            vec![Testimonial {
                id: Some(serde_json::json!(1)),
                quote: "Great".into(),
                author: "A".into(),
            }]
        );
    }

    #[test]
    fn decodes_testimonial_without_id() {
        let testimonials: Vec<Testimonial> =
            serde_json::from_str(r#"[{"quote":"Great","author":"A"}]"#).unwrap();
        assert_eq!(testimonials[0].id, None);
        assert_eq!(testimonials[0].quote, "Great");
    }

    #[test]
    fn non_array_body_is_rejected() {
        assert!(serde_json::from_str::<Vec<Doctor>>(r#"{"error":"rate limited"}"#).is_err());
    }

    #[test]
    fn status_error_message() {
        assert_eq!(ApiError::Status(503).to_string(), "server responded with status 503");
    }
}
