use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Default endpoint of the Baidu field-translation API.
pub const DEFAULT_ENDPOINT: &str = "https://fanyi-api.baidu.com/api/trans/vip/fieldtranslate";

/// Salt range used when signing requests, inclusive on both ends.
const SALT_RANGE: std::ops::RangeInclusive<u32> = 32768..=65536;

/// Baidu translation API client.
///
/// Every request carries an MD5 signature over `appid + text + salt + secret`,
/// with a fresh random salt per call.
#[derive(Debug)]
pub struct Baidu {
    /// HTTP client for API requests
    client: Client,
    /// Application ID issued by Baidu
    app_id: String,
    /// Secret key paired with the app ID
    secret_key: String,
    /// API endpoint URL
    endpoint: String,
}

/// One translated passage in a Baidu response
#[derive(Debug, Deserialize)]
pub struct BaiduTranslation {
    /// The original text
    #[allow(dead_code)]
    pub src: Option<String>,
    /// The translated text
    pub dst: String,
}

/// Baidu API response body
///
/// A successful response carries `trans_result`; an error response carries
/// `error_code`/`error_msg` instead.
#[derive(Debug, Deserialize)]
pub struct BaiduResponse {
    /// Translations, present on success
    pub trans_result: Option<Vec<BaiduTranslation>>,
    /// Error code, present on service errors
    pub error_code: Option<String>,
    /// Error message, present on service errors
    pub error_msg: Option<String>,
}

impl Baidu {
    /// Create a new Baidu client.
    pub fn new(
        app_id: impl Into<String>,
        secret_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            app_id: app_id.into(),
            secret_key: secret_key.into(),
            endpoint: if endpoint.is_empty() {
                DEFAULT_ENDPOINT.to_string()
            } else {
                endpoint
            },
        }
    }

    /// Build the request signature for a passage and salt.
    ///
    /// The signed string is the exact concatenation `appid + text + salt +
    /// secret`, hashed with MD5 and hex-encoded.
    pub fn build_sign(app_id: &str, text: &str, salt: u32, secret_key: &str) -> String {
        let signed = format!("{}{}{}{}", app_id, text, salt, secret_key);
        format!("{:x}", md5::compute(signed.as_bytes()))
    }

    /// Issue one translation request with an explicit salt.
    ///
    /// Split out from [`TranslationProvider::translate`] so tests can pin the
    /// salt and verify the signature deterministically.
    pub async fn translate_with_salt(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        salt: u32,
    ) -> Result<String, ProviderError> {
        let sign = Self::build_sign(&self.app_id, text, salt, &self.secret_key);
        let salt = salt.to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", text),
                ("from", source_language),
                ("to", target_language),
                ("appid", &self.app_id),
                ("salt", &salt),
                ("sign", &sign),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let body = response
            .json::<BaiduResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        extract_translation(body)
    }
}

#[async_trait]
impl TranslationProvider for Baidu {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let salt = rand::rng().random_range(SALT_RANGE);
        debug!("Requesting translation of {} characters", text.chars().count());
        self.translate_with_salt(text, source_language, target_language, salt)
            .await
    }
}

/// Pull the first translation out of a response, or map it to an error.
fn extract_translation(body: BaiduResponse) -> Result<String, ProviderError> {
    match body.trans_result {
        Some(results) => results
            .into_iter()
            .next()
            .map(|t| t.dst)
            .ok_or_else(|| ProviderError::ParseError("empty trans_result array".to_string())),
        None => Err(ProviderError::ApiError {
            code: body.error_code.unwrap_or_else(|| "unknown".to_string()),
            message: body.error_msg.unwrap_or_else(|| "unknown error".to_string()),
        }),
    }
}
